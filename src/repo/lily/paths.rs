//! Record paths in the Lily REST interface.
//!
//! Bug ids are zero-padded and reversed before they become record ids so
//! that consecutive bugs land in different HBase regions.

use crate::record::BugId;

/// Namespace under which every bug field is stored.
pub const NS_BETL: &str = "com.mozilla.bugzilla_etl";

/// Upper bound passed to the version listing; effectively "all versions".
pub const MAX_VERSION: i32 = i32::MAX;

const RECORD_PATH: &str = "/repository/record/";
const USER_SCOPE: &str = "USER.";
const ID_WIDTH: usize = 6;
const MODIFICATION_DATE_FIELD: &str = "betl$modification_date";

/// Record id before percent-encoding, e.g. `USER.240000#` for bug 42.
#[must_use]
pub fn master_record_id(bug_id: BugId) -> String {
    let padded = format!("{bug_id:0>width$}", width = ID_WIDTH);
    let reversed: String = padded.chars().rev().collect();
    format!("{USER_SCOPE}{reversed}#")
}

/// Path of the master record for a bug.
#[must_use]
pub fn master_path(bug_id: BugId) -> String {
    format!(
        "{RECORD_PATH}{}",
        urlencoding::encode(&master_record_id(bug_id))
    )
}

/// Listing of every version of the master, with only the modification date.
#[must_use]
pub fn version_listing_path(master_path: &str) -> String {
    format!(
        "{master_path}/version?max-results={MAX_VERSION}&ns.betl={NS_BETL}&fields={}",
        urlencoding::encode(MODIFICATION_DATE_FIELD)
    )
}

/// Path of the slave record holding the version modified at `timestamp`
/// (Unix seconds). The trailing zeros pad seconds to milliseconds.
#[must_use]
pub fn slave_path(master_path: &str, timestamp: i64) -> String {
    format!("{master_path}{timestamp}000")
}
