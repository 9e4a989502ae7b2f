use tracing::warn;

use crate::cli::EncodeArgs;
use crate::commands::PayloadView;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::input;
use crate::qr::{self, Sequence};

pub fn run(ctx: &AppContext, args: EncodeArgs) -> AppResult<()> {
    let accounts = input::read_accounts(&args.files)?;
    let sequence = Sequence::new(args.position, args.total);
    check_sequence(sequence);

    let payload = qr::encode_with_sequence(&accounts, sequence)?;
    let view = PayloadView::new(payload, accounts.len(), sequence);
    ctx.output.emit(std::slice::from_ref(&view.payload), &view)
}

// The payload carries the pair as given; only flag values a scanner is
// likely to reject.
fn check_sequence(sequence: Sequence) -> bool {
    let plausible = sequence.position >= 1 && sequence.position <= sequence.total;
    if !plausible {
        warn!(
            position = sequence.position,
            total = sequence.total,
            "sequence position is outside 1..=total"
        );
    }
    plausible
}
