pub mod account;
pub mod profile;

pub use account::{Advertiser, User};
pub use profile::{CompanyProfile, NewAd, NewProfile, SharedAd, SocialLink};
