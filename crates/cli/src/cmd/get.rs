use crate::GetArgs;

use super::Session;

pub fn run(session: &Session, args: &GetArgs) {
    let doc = session.open(&args.file);

    let Some(value) = doc.get(args.section.as_deref(), &args.key) else {
        eprintln!("Key '{}' not found", args.key);
        std::process::exit(1);
    };

    for item in value.values() {
        println!("{item}");
    }
}
