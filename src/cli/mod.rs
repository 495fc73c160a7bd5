//! CLI module - Command-line interface for infobox
//!
//! Serving the site is the default; the remaining commands are the management
//! tools for advertisers, profiles and ads.

mod commands;

use clap::{Parser, Subcommand};

/// infobox - Local business directory
#[derive(Parser)]
#[command(name = "infobox")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server (default)
    #[command(alias = "web")]
    Serve,

    /// Create default config file
    #[command(alias = "--init")]
    Init,

    /// Manage advertiser accounts
    Advertiser {
        #[command(subcommand)]
        command: AdvertiserCommands,
    },

    /// Manage company profiles
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },

    /// Manage shared ads
    Ad {
        #[command(subcommand)]
        command: AdCommands,
    },
}

#[derive(Subcommand)]
pub enum AdvertiserCommands {
    /// Register a new advertiser
    Add {
        username: String,
        email: String,
        password: String,
    },
    /// Check a username and password
    Check { username: String, password: String },
    /// Issue a password reset token and print it
    ResetToken { email: String },
    /// Set a new password using a reset token
    ResetPassword {
        username: String,
        token: String,
        new_password: String,
    },
}

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Create a company profile
    Add {
        /// Username of the owning advertiser
        advertiser: String,
        company_name: String,
        description: String,
        #[arg(long)]
        web_url: Option<String>,
        #[arg(long)]
        facebook_url: Option<String>,
        #[arg(long)]
        instagram_url: Option<String>,
        #[arg(long)]
        pinterest_url: Option<String>,
        /// Create the profile hidden from the public site
        #[arg(long)]
        inactive: bool,
    },
    /// Change a profile's company name and slug
    Rename { slug: String, new_name: String },
    /// Show a profile on the public site
    Activate { slug: String },
    /// Hide a profile from the public site
    Deactivate { slug: String },
    /// List all profiles
    #[command(alias = "ls")]
    List,
}

#[derive(Subcommand)]
pub enum AdCommands {
    /// Add an ad for an advertiser
    Add {
        /// Username of the owning advertiser
        advertiser: String,
        ad_name: String,
        image_filename: String,
        /// Attach the ad to this profile
        #[arg(long)]
        profile: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
}

pub use commands::*;
