use crate::SharedString;

/// A value that can be converted to a sequence of scope or name segments.
///
/// This helper trait allows scope and metric-name arguments to be given as a single
/// string, an array of strings, or a vector, without forcing an allocation for the
/// common case of `'static` literals.
pub trait IntoSegments {
    /// Consumes this value, turning it into a vector of segments.
    fn into_segments(self) -> Vec<SharedString>;
}

impl IntoSegments for &'static str {
    fn into_segments(self) -> Vec<SharedString> {
        vec![SharedString::from(self)]
    }
}

impl IntoSegments for String {
    fn into_segments(self) -> Vec<SharedString> {
        vec![SharedString::from(self)]
    }
}

impl<S, const N: usize> IntoSegments for [S; N]
where
    S: Into<SharedString>,
{
    fn into_segments(self) -> Vec<SharedString> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<S> IntoSegments for Vec<S>
where
    S: Into<SharedString>,
{
    fn into_segments(self) -> Vec<SharedString> {
        self.into_iter().map(Into::into).collect()
    }
}

impl<S> IntoSegments for &[S]
where
    S: Clone + Into<SharedString>,
{
    fn into_segments(self) -> Vec<SharedString> {
        self.iter().cloned().map(Into::into).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::IntoSegments;
    use crate::SharedString;

    #[test]
    fn accepted_shapes() {
        assert_eq!("foo".into_segments(), vec![SharedString::from("foo")]);
        assert_eq!(
            String::from("foo").into_segments(),
            vec![SharedString::from("foo")]
        );
        assert_eq!(
            ["foo", "bar"].into_segments(),
            vec![SharedString::from("foo"), SharedString::from("bar")]
        );
        assert_eq!(
            vec![String::from("foo")].into_segments(),
            vec![SharedString::from("foo")]
        );
        assert_eq!(
            (&["foo", "bar"][..]).into_segments(),
            vec![SharedString::from("foo"), SharedString::from("bar")]
        );
    }

    #[test]
    fn empty_shapes_stay_empty() {
        let none: [&'static str; 0] = [];
        assert!(none.into_segments().is_empty());
        assert!(Vec::<String>::new().into_segments().is_empty());
    }
}
