pub mod prelude;

pub mod advertisements;
pub mod articles;
pub mod categories;
pub mod company_profiles;
pub mod media;
pub mod shared_ads;
pub mod shared_advertisers;
pub mod users;
