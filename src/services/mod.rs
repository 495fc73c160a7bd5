pub mod account_service;
pub use account_service::{AccountError, AccountService, AdvertiserInfo, IssuedResetToken};

pub mod account_service_impl;
pub use account_service_impl::SeaOrmAccountService;

pub mod directory_service;
pub use directory_service::{DirectoryError, DirectoryService, ProfilePage};

pub mod directory_service_impl;
pub use directory_service_impl::SeaOrmDirectoryService;
