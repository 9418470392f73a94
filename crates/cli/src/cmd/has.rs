use crate::TargetArgs;

use super::Session;

pub fn run(session: &Session, args: &TargetArgs) {
    let doc = session.open(&args.file);

    match doc.has(args.section.as_deref(), args.key.as_deref()) {
        Ok(found) => println!("{found}"),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }
}
