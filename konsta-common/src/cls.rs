//! Class string merging

/// Join class fragments with single spaces, in order.
///
/// `None` entries are dropped, as are fragments that are empty or only
/// whitespace. Each kept fragment is trimmed, so the result never has
/// leading, trailing or doubled spaces caused by an empty part.
pub fn merge<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut out = String::new();
    for part in parts.into_iter().flatten() {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(part);
    }
    out
}

/// Anything that can contribute (or decline to contribute) a class fragment.
pub trait ClassFragment {
    fn as_fragment(&self) -> Option<&str>;
}

impl ClassFragment for str {
    fn as_fragment(&self) -> Option<&str> {
        Some(self)
    }
}

impl ClassFragment for String {
    fn as_fragment(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: ClassFragment + ?Sized> ClassFragment for &T {
    fn as_fragment(&self) -> Option<&str> {
        (**self).as_fragment()
    }
}

impl<T: ClassFragment> ClassFragment for Option<T> {
    fn as_fragment(&self) -> Option<&str> {
        self.as_ref().and_then(|part| part.as_fragment())
    }
}

/// Merge a mix of `&str`, `String` and `Option<_>` fragments into one class string.
///
/// ```
/// use konsta_common::cls;
///
/// let toolbar = false;
/// let extra: Option<String> = None;
/// assert_eq!(cls!("a", toolbar.then_some("b"), extra, "c"), "a c");
/// ```
#[macro_export]
macro_rules! cls {
    () => {
        ::std::string::String::new()
    };
    ($($part:expr),+ $(,)?) => {
        $crate::cls::merge([$($crate::cls::ClassFragment::as_fragment(&$part)),+])
    };
}
