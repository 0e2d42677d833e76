/// Collection-assigned landing page id (`LP001`, `LP002`, ...).
///
/// Empty for a draft that has not been saved yet.
pub type PageId = String;

/// Factory-assigned content block id (`blk_` plus a unique suffix).
pub type BlockId = String;
