use clap::{arg, command, ArgMatches, Command};

use super::CommandType;
use crate::secret::is_base32_key;
use crate::totp::Totp;
use crate::writer::OutErr;

pub fn subcommand() -> Command<'static> {
    command!(CommandType::Url.as_str())
        .about("Build a QR code provisioning URL for an authenticator app")
        .args(&[
            arg!(-k --key <KEY> "Base32 secret key")
                .required(true)
                .validator(is_base32_key),
            arg!(-i --issuer <ISSUER> "Issuer shown in the authenticator app").required(true),
            arg!(-u --user <USER> "Account name shown in the authenticator app").required(true),
        ])
}

pub fn run_url<W>(url_args: &ArgMatches, writer: &mut W)
where
    W: OutErr,
{
    let (key, issuer, user) = match (
        url_args.value_of("key"),
        url_args.value_of("issuer"),
        url_args.value_of("user"),
    ) {
        (Some(key), Some(issuer), Some(user)) => (key, issuer, user),
        _ => {
            writer.write_err("Key, issuer and user are required\n");
            return;
        }
    };

    let engine = match Totp::with_default_window(key) {
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
