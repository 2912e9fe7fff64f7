//! Mapping of parsed LAS documents to OSDU records
//!
//! - [`attributes`] - pure builders for the ACL, Legal and data blocks
//! - [`record_mapper`] - assembles complete Wellbore and WellLog records
//!
//! Builder errors propagate unchanged so callers see the precise failing
//! condition.

pub mod attributes;
pub mod record_mapper;

#[cfg(test)]
pub mod tests;

pub use attributes::{
    build_acl, build_curves, build_legal, build_name_aliases, build_well_log_data,
    build_wellbore_data, encode_unit, extract_uwi,
};
pub use record_mapper::RecordMapper;
