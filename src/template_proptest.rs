//! Property-based tests for placeholder substitution and overlay logging.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::config::InstallerConfig;
    use crate::filesystem::MemoryFS;
    use crate::phases::{compose, overlay};
    use crate::template::{substitute_tree, Substitution};
    use proptest::prelude::*;

    const PLACEHOLDER: &str = "#TENANT#";

    fn tenant_name() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("bampfa".to_string()),
            Just("cinefiles".to_string()),
            Just("pahma".to_string()),
        ]
    }

    // ============================================================================
    // Substitution property tests
    // ============================================================================

    proptest! {
        /// Property: substitution equals a plain string replace of the placeholder
        #[test]
        fn substitution_matches_str_replace(
            parts in prop::collection::vec("[a-z \n\r{}#]{0,12}", 0..6),
            tenant in tenant_name(),
        ) {
            let input = parts.join(PLACEHOLDER);
            let sub = Substitution::new(PLACEHOLDER, &tenant).unwrap();
            let output = sub
                .apply(input.as_bytes())
                .map(|b| String::from_utf8(b).unwrap())
                .unwrap_or_else(|| input.clone());
            prop_assert_eq!(output, input.replace(PLACEHOLDER, &tenant));
        }

        /// Property: no placeholder survives substitution
        #[test]
        fn substitution_leaves_no_placeholder(
            parts in prop::collection::vec("[a-zA-Z0-9 \n]{0,10}", 1..6),
            tenant in tenant_name(),
        ) {
            let input = parts.join(PLACEHOLDER);
            let sub = Substitution::new(PLACEHOLDER, &tenant).unwrap();
            let output = sub.apply(input.as_bytes()).unwrap_or_else(|| input.clone().into_bytes());
            let text = String::from_utf8(output).unwrap();
            prop_assert!(!text.contains(PLACEHOLDER));
        }

        /// Property: line count is unchanged by substitution
        #[test]
        fn substitution_preserves_line_count(
            parts in prop::collection::vec("[a-z\n]{0,10}", 0..6),
            tenant in tenant_name(),
        ) {
            let input = parts.join(PLACEHOLDER);
            let sub = Substitution::new(PLACEHOLDER, &tenant).unwrap();
            let output = sub.apply(input.as_bytes()).unwrap_or_else(|| input.clone().into_bytes());
            let newlines_in = input.bytes().filter(|&b| b == b'\n').count();
            let newlines_out = output.iter().filter(|&&b| b == b'\n').count();
            prop_assert_eq!(newlines_in, newlines_out);
        }

        /// Property: binary extensions are never altered, whatever their bytes
        #[test]
        fn binary_files_are_untouched(
            content in prop::collection::vec(any::<u8>(), 0..64),
            ext in prop_oneof![Just("jpg"), Just("png"), Just("py"), Just("svg"), Just("ttf")],
            tenant in tenant_name(),
        ) {
            let config = InstallerConfig::default();
            let mut bytes = content.clone();
            bytes.extend_from_slice(PLACEHOLDER.as_bytes());

            let mut fs = MemoryFS::new();
            let path = format!("public/asset.{}", ext);
            fs.add_file_content(&path, bytes.clone()).unwrap();
            substitute_tree(&mut fs, &config, &tenant).unwrap();

            prop_assert_eq!(&fs.get_file(&path).unwrap().content, &bytes);
        }

        /// Property: the overlay always wins on a shared path
        #[test]
        fn overlay_content_wins(
            common in "[a-z#]{0,20}",
            tenant_content in "[a-z]{0,20}",
            path in "(app|config|lib|public|spec)/[a-z]{1,8}\\.rb",
        ) {
            let mut common_fs = MemoryFS::new();
            common_fs.add_file_string(&path, &common).unwrap();
            let mut overlay_fs = MemoryFS::new();
            overlay_fs.add_file_string(&path, &tenant_content).unwrap();

            let final_fs = compose(&common_fs, &overlay_fs);
            prop_assert_eq!(
                &final_fs.get_file(&path).unwrap().content,
                &tenant_content.into_bytes()
            );
        }
    }

    // ============================================================================
    // Overlay log pattern property tests
    // ============================================================================

    proptest! {
        /// Property: word-character names with an extension are always logged
        #[test]
        fn word_names_with_extension_are_logged(
            stem in "[a-zA-Z0-9_]{1,12}",
            ext in "[a-z]{1,4}",
        ) {
            let pattern = InstallerConfig::default().log_pattern().unwrap();
            let name = format!("{}.{}", stem, ext);
            prop_assert!(overlay::looks_like_file(std::path::Path::new(&name), &pattern));
        }

        /// Property: dotfiles are never logged by the default pattern
        #[test]
        fn dotfiles_are_not_logged(name in "\\.[a-z]{1,10}") {
            let pattern = InstallerConfig::default().log_pattern().unwrap();
            prop_assert!(!overlay::looks_like_file(std::path::Path::new(&name), &pattern));
        }
    }
}
