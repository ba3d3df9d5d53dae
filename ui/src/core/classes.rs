//! Class-name composition for `class:` attributes.
//!
//! ```ignore
//! let class = classes!["button", ("button--active", active), extra_class];
//! ```

/// Accumulates class tokens, dropping empties and duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: impl IntoClasses) -> &mut Self {
        value.push_into(self);
        self
    }

    fn push_token(&mut self, raw: &str) {
        for token in raw.split_whitespace() {
            if !self.tokens.iter().any(|t| t == token) {
                self.tokens.push(token.to_string());
            }
        }
    }

    pub fn finish(&self) -> String {
        self.tokens.join(" ")
    }
}

/// Anything that can contribute class tokens.
pub trait IntoClasses {
    fn push_into(self, list: &mut ClassList);
}

impl IntoClasses for &str {
    fn push_into(self, list: &mut ClassList) {
        list.push_token(self);
    }
}

impl IntoClasses for String {
    fn push_into(self, list: &mut ClassList) {
        list.push_token(&self);
    }
}

impl IntoClasses for &String {
    fn push_into(self, list: &mut ClassList) {
        list.push_token(self);
    }
}

impl<T: IntoClasses> IntoClasses for Option<T> {
    fn push_into(self, list: &mut ClassList) {
        if let Some(value) = self {
            value.push_into(list);
        }
    }
}

/// `(class, condition)`: included only when the condition holds.
impl<T: IntoClasses> IntoClasses for (T, bool) {
    fn push_into(self, list: &mut ClassList) {
        if self.1 {
            self.0.push_into(list);
        }
    }
}

impl<T: IntoClasses> IntoClasses for Vec<T> {
    fn push_into(self, list: &mut ClassList) {
        for value in self {
            value.push_into(list);
        }
    }
}

impl<T: IntoClasses, const N: usize> IntoClasses for [T; N] {
    fn push_into(self, list: &mut ClassList) {
        for value in self {
            value.push_into(list);
        }
    }
}

impl<T: IntoClasses + Clone> IntoClasses for &[T] {
    fn push_into(self, list: &mut ClassList) {
        for value in self {
            value.clone().push_into(list);
        }
    }
}

/// Merges class expressions into one space-separated string.
#[macro_export]
macro_rules! classes {
    () => {
        ::std::string::String::new()
    };
    ($( $value:expr ),+ $(,)?) => {{
        let mut list = $crate::core::classes::ClassList::new();
        $( list.push($value); )+
        list.finish()
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn joins_and_splits_whitespace() {
        assert_eq!(classes!["a", "b  c", String::from(" d ")], "a b c d");
    }

    #[test]
    fn conditionals_and_options() {
        let extra: Option<String> = None;
        assert_eq!(
            classes!["base", ("on", true), ("off", false), Some("opt"), extra],
            "base on opt"
        );
    }

    #[test]
    fn nested_collections() {
        let list: &[&str] = &["x", "y"];
        assert_eq!(classes![vec!["a", "b"], ["c"], list], "a b c x y");
    }

    #[test]
    fn duplicates_keep_first_position() {
        assert_eq!(classes!["a b", "c", "b a", ("c", true)], "a b c");
    }

    #[test]
    fn empty_inputs_give_empty_string() {
        assert_eq!(classes![], "");
        assert_eq!(classes!["", "   ", ("x", false)], "");
    }
}
