pub mod ad;
pub mod advertiser;
pub mod profile;
