use crate::TargetArgs;

use super::Session;

pub fn run(session: &Session, args: &TargetArgs) {
    let mut doc = session.open(&args.file);

    if let Err(e) = doc.remove(args.section.as_deref(), args.key.as_deref()) {
        eprintln!("Error: {}", e);
        std::process::exit(2);
    }
    session.save(&doc);
}
