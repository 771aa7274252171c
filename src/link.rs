//! Parsing of the `Link` response header into pagination URLs.
//!
//! The API sends RFC 5988-flavoured links on collection responses:
//!
//! ```text
//! <https://api.mangopay.com/v2.01/x/users?page=1&per_page=10>; rel="first",
//! <https://api.mangopay.com/v2.01/x/users?page=3&per_page=10>; rel="next"
//! ```
//!
//! Entries never contain embedded commas and no delimiter is ever escaped, so
//! plain tokenization is enough.

/// The relation a pagination link points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkRelation {
    /// `rel="first"`
    First,
    /// `rel="previous"`
    Previous,
    /// `rel="next"`
    Next,
    /// `rel="last"`
    Last,
}

impl LinkRelation {
    /// All relations in slot order.
    pub const ALL: [LinkRelation; 4] = [
        LinkRelation::First,
        LinkRelation::Previous,
        LinkRelation::Next,
        LinkRelation::Last,
    ];

    /// Maps a literal relation name to a relation. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "first" => Some(LinkRelation::First),
            "previous" => Some(LinkRelation::Previous),
            "next" => Some(LinkRelation::Next),
            "last" => Some(LinkRelation::Last),
            _ => None,
        }
    }

    /// The literal relation name used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkRelation::First => "first",
            LinkRelation::Previous => "previous",
            LinkRelation::Next => "next",
            LinkRelation::Last => "last",
        }
    }

    fn slot(self) -> usize {
        match self {
            LinkRelation::First => 0,
            LinkRelation::Previous => 1,
            LinkRelation::Next => 2,
            LinkRelation::Last => 3,
        }
    }
}

/// The four pagination link slots of a collection response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationLinks {
    slots: [Option<String>; 4],
}

impl PaginationLinks {
    /// Returns the URL stored for `relation`, if any.
    pub fn get(&self, relation: LinkRelation) -> Option<&str> {
        self.slots[relation.slot()].as_deref()
    }

    /// Stores `url` for `relation`, replacing any previous value.
    pub fn set(&mut self, relation: LinkRelation, url: impl Into<String>) {
        self.slots[relation.slot()] = Some(url.into());
    }

    /// Overwrites only the slots that are filled in `other`.
    pub fn merge(&mut self, other: PaginationLinks) {
        for (slot, incoming) in self.slots.iter_mut().zip(other.slots) {
            if incoming.is_some() {
                *slot = incoming;
            }
        }
    }

    pub fn first(&self) -> Option<&str> {
        self.get(LinkRelation::First)
    }

    pub fn previous(&self) -> Option<&str> {
        self.get(LinkRelation::Previous)
    }

    pub fn next(&self) -> Option<&str> {
        self.get(LinkRelation::Next)
    }

    pub fn last(&self) -> Option<&str> {
        self.get(LinkRelation::Last)
    }

    /// Returns `true` when no slot is filled.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

/// Parses a raw `Link` header value.
///
/// Malformed entries (no `;`, or a relation part without two `"` characters)
/// and unknown relations are skipped; this function never fails.
///
/// # Examples
///
/// ```
/// use mangopay::link::parse_link_header;
///
/// let links = parse_link_header(
///     r#"<https://api/x?page=1>; rel="first", <https://api/x?page=3>; rel="next""#,
/// );
/// assert_eq!(links.first(), Some("https://api/x?page=1"));
/// assert_eq!(links.next(), Some("https://api/x?page=3"));
/// assert_eq!(links.last(), None);
/// ```
pub fn parse_link_header(value: &str) -> PaginationLinks {
    let mut links = PaginationLinks::default();

    for entry in value.split(',') {
        let Some((url, relation)) = parse_entry(entry) else {
            continue;
        };
        links.set(relation, url);
    }

    links
}

fn parse_entry(entry: &str) -> Option<(&str, LinkRelation)> {
    let (url_part, rel_part) = entry.split_once(';')?;

    // Text between the first and second double quote.
    let mut quoted = rel_part.splitn(3, '"');
    quoted.next()?;
    let name = quoted.next()?;
    quoted.next()?;

    let relation = LinkRelation::from_name(name.trim())?;
    let url = url_part
        .trim()
        .trim_start_matches('<')
        .trim_end_matches('>')
        .trim();

    Some((url, relation))
}
