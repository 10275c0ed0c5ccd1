//! The CSS named colors, from `aliceblue` to `yellowgreen`. The table is stored as a small CSV file
//! compiled into the library and read the first time a name is looked up.

use std::collections::HashMap;

use tracing::debug;

static NAMED_COLORS_CSV: &str = include_str!("named_colors.csv");

#[derive(Debug, Deserialize)]
struct Record {
    name: String,
    hex: String,
}

fn read_named_colors() -> HashMap<String, String> {
    let mut reader = csv::Reader::from_reader(NAMED_COLORS_CSV.as_bytes());
    let mut table = HashMap::new();
    for result in reader.deserialize() {
        // the file ships with the crate, so bad data is a bug here and not the caller's problem
        let record: Record = result.expect("named color table is malformed");
        table.insert(record.name, record.hex);
    }
    debug!(entries = table.len(), "loaded named color table");
    table
}

lazy_static! {
    static ref NAMED_COLORS: HashMap<String, String> = read_named_colors();
}

/// Looks up a CSS color keyword, returning its `#rrggbb` code. Names are matched exactly, so the
/// caller is expected to lowercase and trim first; [`Color::parse`](crate::color::Color::parse)
/// does this.
/// # Example
/// ```
/// # use vermilion::named::lookup;
/// assert_eq!(lookup("rebeccapurple"), Some("#663399"));
/// assert_eq!(lookup("grey"), lookup("gray"));
/// assert_eq!(lookup("RebeccaPurple"), None);
/// ```
pub fn lookup(name: &str) -> Option<&'static str> {
    NAMED_COLORS.get(name).map(|hex| hex.as_str())
}

/// Every known color name, in alphabetical order.
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = NAMED_COLORS.keys().map(|name| name.as_str()).collect();
    names.sort_unstable();
    names
}
