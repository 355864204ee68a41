use clap::{Parser, Subcommand};

use crate::digest::DigestAlgorithm;

pub mod main;

/// Classical ciphers, password encryption and digests for text
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a classical cipher over TEXT
    Cipher {
        /// Cipher: caesar:<shift>, vigenere:<key>, atbash, rot13, railfence:<rails>,
        /// playfair:<key>, substitution:<26 letters>, affine:<a>,<b>, morse, binary.
        /// Falls back to the configured cipher
        #[arg(short, long)]
        variant: Option<String>,

        /// Decrypt (or decode) instead of encrypt
        #[arg(short, long)]
        decrypt: bool,

        text: String,
    },

    /// Encrypt TEXT with a password (PBKDF2 + AES-256-GCM), print a base64 envelope
    Seal {
        #[arg(short, long)]
        password: String,

        text: String,
    },

    /// Decrypt a base64 envelope produced by `seal`
    Open {
        #[arg(short, long)]
        password: String,

        envelope: String,
    },

    /// Compute digests of TEXT (md5, sha1, sha256)
    Hash {
        /// Algorithm, repeatable. Falls back to the configured list
        #[arg(short, long = "algorithm")]
        algorithms: Vec<DigestAlgorithm>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// Uppercase hex digits. Also enabled by `uppercase` in [digest]
        #[arg(short, long)]
        uppercase: bool,

        text: String,
    },

    /// Encode TEXT as base64, or decode it
    Base64 {
        #[arg(short, long)]
        decode: bool,

        text: String,
    },
}
