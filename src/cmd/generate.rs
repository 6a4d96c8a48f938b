use clap::{arg, command, ArgMatches, Command};

use super::CommandType;
use crate::secret::generate_secret;
use crate::totp::Totp;
use crate::writer::OutErr;

pub fn subcommand() -> Command<'static> {
    command!(CommandType::Generate.as_str())
        .about("Generate a Base32 secret key")
        .args(&[
            arg!(-i --issuer <ISSUER> "Issuer to embed in a provisioning URL").required(false),
            arg!(-u --user <USER> "Account name to embed in a provisioning URL").required(false),
        ])
}

pub fn run_generate<W>(generate_args: &ArgMatches, writer: &mut W)
where
    W: OutErr,
{
    let new_secret_key = match generate_secret() {
        Ok(new_secret_key) => new_secret_key,
        Err(err) => {
            writer.write_err(&format!("{}\n", err));
            return;
        }
    };

    writer.write(&format!("{}\n", new_secret_key));

    // Both fields are needed for a provisioning URL; with neither this is
    // a bare secret generation
    let (issuer, user) = match (
        generate_args.value_of("issuer"),
        generate_args.value_of("user"),
    ) {
        (Some(issuer), Some(user)) => (issuer, user),
        (None, None) => return,
        _ => {
            writer.write_err("Both issuer and user are required for a provisioning URL\n");
            return;
        }
    };

    let engine = match Totp::with_default_window(&new_secret_key) {
        Ok(engine) => engine,
        Err(err) => {
            writer.write_err(&format!("{}\n", err));
            return;
        }
    };

    match engine.provisioning_url(issuer, user) {
        Ok(url) => writer.write(&format!("{}\n", url)),
        Err(err) => writer.write_err(&format!("{}\n", err)),
    }
}
