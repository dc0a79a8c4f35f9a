//! Treats empty strings, empty lists and nulls as absent values.

/// A value that may be "blank" and should then be left out of the document.
pub trait Blank {
    fn is_blank(&self) -> bool;
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Blank for &str {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Blank for Vec<T> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Blank for serde_json::Value {
    fn is_blank(&self) -> bool {
        self.is_null()
    }
}

impl<T: Blank> Blank for Option<T> {
    fn is_blank(&self) -> bool {
        self.as_ref().is_none_or(Blank::is_blank)
    }
}

/// `Some(value)` unless the value is blank.
pub fn present<T: Blank>(value: T) -> Option<T> {
    if value.is_blank() { None } else { Some(value) }
}

/// Owned copy of a borrowed value, or `None` when blank.
pub fn present_cloned<T: Blank + Clone>(value: &T) -> Option<T> {
    if value.is_blank() {
        None
    } else {
        Some(value.clone())
    }
}
