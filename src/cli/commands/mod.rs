mod ad;
mod advertiser;
mod profile;

pub use ad::cmd_ad_add;
pub use advertiser::{
    cmd_advertiser_add, cmd_advertiser_check, cmd_advertiser_reset_password,
    cmd_advertiser_reset_token,
};
pub use profile::{
    ProfileLinks, cmd_profile_add, cmd_profile_list, cmd_profile_rename, cmd_profile_set_active,
};
