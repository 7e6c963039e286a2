//! CLI argument structs for all subcommands.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(after_long_help = r#"EXAMPLES:
  Single header:   vtfind show ID2D1Bitmap "C:\Program Files (x86)\Windows Kits\10\Include\10.0.22621.0\um\d2d1.h"
  Directory:       vtfind show IDXGISwapChain1 C:\sdk\include\shared
  Recursive:       vtfind show IDWriteFactory C:\sdk\include -r
  Glob:            vtfind show ID3D11Device "C:\sdk\include\um\d3d11*.h"
  JSON output:     vtfind show ID2D1Bitmap include/um -r --json
  Progress:        vtfind show ID2D1Bitmap include -r --status

NOTES:
  - Interface names are matched case-insensitively.
  - A directory pattern scans *.h files; add -r to descend into subdirectories.
  - Bases declared with DX_DECLARE_INTERFACE are resolved from the same header.
  - MIDL headers list every inherited slot in their C Vtbl struct, so no base lookup happens.
"#)]
pub struct ShowArgs {
    /// Interface whose vtable to print (e.g. ID2D1Bitmap)
    pub interface: String,

    /// Header file, directory of headers, or glob pattern
    pub pattern: String,

    /// Descend into subdirectories of a directory or glob pattern
    #[arg(short, long)]
    pub recurse: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Show the header currently being scanned on stderr
    #[arg(long)]
    pub status: bool,

    /// Log level for stderr output (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[derive(Parser, Debug)]
#[command(after_long_help = r#"EXAMPLES:
  All D2D interfaces:  vtfind list "C:\sdk\include\um\d2d1*.h"
  Whole tree as JSON:  vtfind list C:\sdk\include -r --json
"#)]
pub struct ListArgs {
    /// Header file, directory of headers, or glob pattern
    pub pattern: String,

    /// Descend into subdirectories of a directory or glob pattern
    #[arg(short, long)]
    pub recurse: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Show the header currently being scanned on stderr
    #[arg(long)]
    pub status: bool,

    /// Log level for stderr output (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
