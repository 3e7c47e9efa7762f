//! `scalefmt object-id` — Print the creation time embedded in an object id.

use clap::Args;
use scalefmt_convert::parser::{date_from_object_id, only_guid};

/// Arguments for the `object-id` command.
#[derive(Args, Debug)]
pub struct ObjectIdArgs {
    /// Object id; a trailing `\suffix` is ignored.
    pub id: String,
}

/// Executes the `object-id` command.
///
/// # Errors
///
/// Returns an error if the id does not start with eight hex digits.
pub fn execute(args: &ObjectIdArgs) -> anyhow::Result<()> {
    let id = only_guid(&args.id);
    let Some(created) = date_from_object_id(id) else {
        anyhow::bail!("invalid object id: {id}");
    };
    println!("{}", created.to_rfc3339());
    Ok(())
}
