/// Path segments dropped before deriving a function name: conventional
/// API/application/identity prefixes that carry no meaning of their own.
pub const SEGMENT_STOPLIST: [&str; 3] = ["api", "app", "identity"];

/// Derive a PascalCase identifier from a path segment or schema key piece.
///
/// Strips `{`/`}` path-parameter delimiters, splits on `-`, and upper-cases
/// the first character of each piece. Characters after the first are left
/// untouched: `userRole` stays `UserRole`, never `Userrole`.
pub fn pascal_segment(segment: &str) -> String {
    let cleaned: String = segment.chars().filter(|c| *c != '{' && *c != '}').collect();
    cleaned.split('-').map(capitalize_first).collect()
}

fn capitalize_first(piece: &str) -> String {
    let mut chars = piece.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Derive the base function name for an operation from its path.
///
/// Splits on `/`, drops empty segments and the stoplist, pascals and
/// concatenates the rest, then strips the first occurrence of the module's
/// own pascal name so every function in a module does not repeat it. An
/// empty result falls back to the module name.
pub fn function_base_name(path: &str, module_pascal: &str) -> String {
    let joined: String = path
        .split('/')
        .filter(|seg| !seg.is_empty() && !SEGMENT_STOPLIST.contains(seg))
        .map(pascal_segment)
        .collect();

    let stripped = joined.replacen(module_pascal, "", 1);
    if stripped.is_empty() {
        module_pascal.to_string()
    } else {
        stripped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kebab_segment() {
        assert_eq!(pascal_segment("user-role"), "UserRole");
    }

    #[test]
    fn test_path_parameter_segment() {
        assert_eq!(pascal_segment("{id}"), "Id");
        assert_eq!(pascal_segment("{tenant-id}"), "TenantId");
    }

    #[test]
    fn test_single_segment() {
        assert_eq!(pascal_segment("roles"), "Roles");
    }

    #[test]
    fn test_camel_tail_preserved() {
        assert_eq!(pascal_segment("userName"), "UserName");
    }

    #[test]
    fn test_base_name_strips_stoplist_and_module() {
        assert_eq!(function_base_name("/api/identity/roles/{id}", "Roles"), "Id");
    }

    #[test]
    fn test_base_name_falls_back_to_module() {
        assert_eq!(function_base_name("/api/identity/roles", "Roles"), "Roles");
    }

    #[test]
    fn test_base_name_keeps_unrelated_segments() {
        assert_eq!(
            function_base_name("/api/account/login-info", "Account"),
            "LoginInfo"
        );
    }

    #[test]
    fn test_base_name_strips_module_once() {
        assert_eq!(
            function_base_name("/api/roles/roles-export", "Roles"),
            "RolesExport"
        );
    }
}
