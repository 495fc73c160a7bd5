pub use super::advertisements::Entity as Advertisements;
pub use super::articles::Entity as Articles;
pub use super::categories::Entity as Categories;
pub use super::company_profiles::Entity as CompanyProfiles;
pub use super::media::Entity as Media;
pub use super::shared_ads::Entity as SharedAds;
pub use super::shared_advertisers::Entity as SharedAdvertisers;
pub use super::users::Entity as Users;
