use anyhow::{anyhow, Context};
use clap::Parser;

use crate::classic::{self, CipherRequest, Direction};
use crate::cli::{Args, Command};
use crate::config::{self, Config};
use crate::{codec, crypto, digest, utils};

pub async fn run_cli() -> anyhow::Result<()> {
    let args = Args::parse();

    let cfg = match &args.config {
        Some(path) => config::load(path)?,
        None => Config::default(),
    };

    if let Err(e) = utils::init_tracing(cfg.log.level_filter()?) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let output = execute(args.command, &cfg).await?;
    println!("{}", output);
    Ok(())
}

/// Runs one command and returns what should be printed
pub async fn execute(command: Command, cfg: &Config) -> anyhow::Result<String> {
    match command {
        Command::Cipher {
            variant,
            decrypt,
            text,
        } => {
            let variant = match variant {
                Some(s) => classic::parse_cipher_config(&s)?,
                None => cfg
                    .cipher
                    .clone()
                    .context("no cipher given; pass --variant or set [cipher] in the config")?,
            };
            let direction = if decrypt {
                Direction::Decrypt
            } else {
                Direction::Encrypt
            };
            let output = classic::transform(&CipherRequest::new(variant, direction, text))?;
            Ok(output)
        }

        Command::Seal { password, text } => {
            let envelope = tokio::task::spawn_blocking(move || {
                crypto::encrypt_with_password(&text, &password)
            })
            .await??;
            Ok(envelope)
        }

        Command::Open { password, envelope } => {
            let plaintext = tokio::task::spawn_blocking(move || {
                crypto::decrypt_with_password(&envelope, &password)
            })
            .await??;
            Ok(plaintext)
        }

        Command::Hash {
            algorithms,
            json,
            uppercase,
            text,
        } => {
            let algorithms = if algorithms.is_empty() {
                cfg.digest.algorithms.clone()
            } else {
                algorithms
            };
            let uppercase = uppercase || cfg.digest.uppercase;
            let outputs = digest::digest_many(&text, &algorithms, uppercase)
                .await
                .map_err(|e| anyhow!(e))?;

            if json {
                return Ok(serde_json::to_string_pretty(&outputs)?);
            }
            let lines: Vec<String> = outputs
                .iter()
                .map(|o| format!("{:<8} {}", o.algorithm, o.hex))
                .collect();
            Ok(lines.join("\n"))
        }

        Command::Base64 { decode, text } => {
            if decode {
                Ok(codec::base64::decode_text(&text)?)
            } else {
                Ok(codec::base64::encode_text(&text))
            }
        }
    }
}
