//! Classification of raw path segments.

use super::SEPARATOR;

/// A single `/`-delimited piece of a path string.
///
/// # Examples
///
/// ```
/// use homograph::path::Segment;
///
/// assert_eq!(Segment::parse(""), Segment::Empty);
/// assert_eq!(Segment::parse("."), Segment::Current);
/// assert_eq!(Segment::parse(".."), Segment::Parent);
/// assert_eq!(Segment::parse("..."), Segment::Normal("..."));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment<'a> {
    /// Produced by leading, trailing or repeated separators.
    Empty,
    /// `.`
    Current,
    /// `..`
    Parent,
    /// Any other name, kept verbatim.
    Normal(&'a str),
}

impl<'a> Segment<'a> {
    /// Classify one raw segment.
    ///
    /// Only the exact strings `""`, `"."` and `".."` are special. Names such
    /// as `" "`, `"..."` or `"C:"` are normal segments.
    #[must_use]
    pub fn parse(raw: &'a str) -> Self {
        match raw {
            "" => Self::Empty,
            "." => Self::Current,
            ".." => Self::Parent,
            name => Self::Normal(name),
        }
    }

    /// Split a path string on `/` and classify every piece.
    ///
    /// Splitting never drops anything, so `"/a//b/"` yields
    /// `Empty, Normal("a"), Empty, Normal("b"), Empty`.
    ///
    /// # Examples
    ///
    /// ```
    /// use homograph::path::Segment;
    ///
    /// let segments: Vec<_> = Segment::split("./a/..").collect();
    /// assert_eq!(
    ///     segments,
    ///     vec![Segment::Current, Segment::Normal("a"), Segment::Parent]
    /// );
    /// ```
    pub fn split(path: &'a str) -> impl Iterator<Item = Segment<'a>> + 'a {
        path.split(SEPARATOR).map(Segment::parse)
    }

    /// Returns true for segments that leave the resolved path unchanged.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        matches!(self, Self::Empty | Self::Current)
    }

    /// The name carried by a normal segment.
    #[must_use]
    pub fn name(&self) -> Option<&'a str> {
        match self {
            Self::Normal(name) => Some(name),
            _ => None,
        }
    }
}
