use std::io;

use jiff::civil::Date;

use crate::currency::exchange_rate_info;

pub(super) fn run(today: Date, out: &mut impl io::Write) -> anyhow::Result<()> {
    let info = exchange_rate_info(today);

    writeln!(out, "{} (as of {})", info.formatted, info.last_updated)?;

    Ok(())
}
