use crate::SetArgs;

use super::Session;

pub fn run(session: &Session, args: SetArgs) {
    let mut doc = session.open(&args.file);

    doc.set(args.section.as_deref(), args.key, args.value);
    session.save(&doc);
}
