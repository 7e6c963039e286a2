//! The implicit `IUnknown` slots every COM interface starts with.

use std::sync::LazyLock;

use super::types::MethodRecord;

/// Name of the root interface.
pub const ROOT_INTERFACE: &str = "IUnknown";

const ROOT_METHOD_NAMES: [&str; 3] = ["QueryInterface", "AddRef", "Release"];

static ROOT_METHODS: LazyLock<Vec<MethodRecord>> = LazyLock::new(|| {
    ROOT_METHOD_NAMES
        .iter()
        .enumerate()
        .map(|(index, name)| MethodRecord {
            index,
            name: (*name).to_string(),
            line_number: None,
            defining_interface: ROOT_INTERFACE.to_string(),
            interface_id: None,
        })
        .collect()
});

/// `QueryInterface`, `AddRef`, `Release` at slots 0-2.
#[must_use]
pub fn root_methods() -> &'static [MethodRecord] {
    &ROOT_METHODS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_methods_order() {
        let names: Vec<&str> = root_methods().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["QueryInterface", "AddRef", "Release"]);
    }

    #[test]
    fn test_root_methods_shape() {
        for (i, m) in root_methods().iter().enumerate() {
            assert_eq!(m.index, i);
            assert_eq!(m.line_number, None);
            assert_eq!(m.interface_id, None);
            assert_eq!(m.defining_interface, "IUnknown");
        }
    }

    #[test]
    fn test_root_methods_shared() {
        assert!(std::ptr::eq(root_methods(), root_methods()));
    }
}
