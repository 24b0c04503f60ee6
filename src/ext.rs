//! Extension traits for built-in Rust types.

use crate::generated::Generated;

/// Path editing on a result that may be absent.
///
/// Every method does nothing and returns `false` on `None`, so results of a
/// failed generation can be edited without checking first.
pub trait GeneratedExt {
    /// See [`Generated::modify_suffix_path`].
    fn modify_suffix_path(&mut self, suffix: &str, sub_directories: &[&str]) -> bool;

    /// See [`Generated::modify_prefix_path`].
    fn modify_prefix_path(&mut self, prefix: &str, sub_directories: &[&str]) -> bool;

    /// See [`Generated::replace_file_name`].
    fn replace_file_name(&mut self, file_name: &str) -> bool;
}

impl GeneratedExt for Option<Generated> {
    fn modify_suffix_path(&mut self, suffix: &str, sub_directories: &[&str]) -> bool {
        match self {
            Some(generated) => {
                generated.modify_suffix_path(suffix, sub_directories);
                true
            }
            None => false,
        }
    }

    fn modify_prefix_path(&mut self, prefix: &str, sub_directories: &[&str]) -> bool {
        match self {
            Some(generated) => {
                generated.modify_prefix_path(prefix, sub_directories);
                true
            }
            None => false,
        }
    }

    fn replace_file_name(&mut self, file_name: &str) -> bool {
        self.as_mut()
            .is_some_and(|generated| generated.replace_file_name(file_name))
    }
}
