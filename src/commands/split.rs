use crate::cli::SplitArgs;
use crate::commands::PayloadView;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::input;
use crate::qr;

pub fn run(ctx: &AppContext, args: SplitArgs) -> AppResult<()> {
    let accounts = input::read_accounts(&args.files)?;
    let views: Vec<_> = qr::encode_sequence(&accounts, args.per_code)?
        .into_iter()
        .map(PayloadView::from)
        .collect();

    let lines: Vec<_> = views.iter().map(|view| view.payload.clone()).collect();
    ctx.output.emit(&lines, &views)
}
