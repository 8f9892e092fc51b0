//! Sentinel identifiers owned by the Viper protocol
//!
//! The checker interprets these values specially. Ids generated by this
//! crate must never land on one of them.

/// Write id of the implicit initial write
pub const INIT_WRITE_ID: u64 = 0xbebe_ebee;

/// Id of the implicit initial transaction
pub const INIT_TXN_ID: u64 = 0xbebe_ebee;

/// Placeholder for "no transaction"
pub const NULL_TXN_ID: u64 = 0xdead_beef;

/// Garbage-collection marker (true)
pub const GC_WID_TRUE: u64 = 0x2333_2333;

/// Garbage-collection marker (false)
pub const GC_WID_FALSE: u64 = 0x6666_6666;

/// All sentinels with their names, ascending by value
pub const RESERVED_IDS: [(&str, u64); 5] = [
    ("GC_WID_TRUE", GC_WID_TRUE),
    ("GC_WID_FALSE", GC_WID_FALSE),
    ("INIT_WRITE_ID", INIT_WRITE_ID),
    ("INIT_TXN_ID", INIT_TXN_ID),
    ("NULL_TXN_ID", NULL_TXN_ID),
];

/// Name of the sentinel equal to `id`, if any
pub fn reserved_name(id: u64) -> Option<&'static str> {
    RESERVED_IDS
        .iter()
        .find(|(_, value)| *value == id)
        .map(|(name, _)| *name)
}

/// First sentinel inside the half-open range `[start, end)`
pub fn first_reserved_in(start: u64, end: u64) -> Option<(&'static str, u64)> {
    RESERVED_IDS
        .iter()
        .copied()
        .find(|(_, value)| (start..end).contains(value))
}
