use crate::patterns::lazy_regex;

/// The custom `` md``x`` `` emphasis marker.
///
/// Unlike the other inline kinds the marker may span several lines.
pub struct Marker;

impl Marker {
    pub const OPEN: &'static str = "md``";
    pub const CLOSE: &'static str = "``";

    lazy_regex! {
        pub fn pattern = r"(?s)md``(.*?)``";
    }
}
