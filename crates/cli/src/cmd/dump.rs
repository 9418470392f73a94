//! Dump command implementation.

use crate::DumpArgs;

use super::Session;

pub fn run(session: &Session, args: &DumpArgs) {
    let doc = session.open(&args.file);

    if args.json {
        match serde_json::to_string_pretty(doc.raw_data()) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing to JSON: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", doc.build_output(session.options.sections));
    }
}
