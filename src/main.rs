use std::process::ExitCode;

use ordered_skiplist::SkipList;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("skiplist-demo: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> ordered_skiplist::Result<()> {
    let mut list = SkipList::new(4, 0.5)?;
    list.insert_all([3, 7, 19, 17, 26, 21])?;

    println!("Skip List:");
    print!("{list}");

    let found = if list.search(19) { "exists" } else { "does not exist" };
    println!();
    println!("Search for element 19: {found}");

    list.delete(19);
    println!();
    println!("Skip List after removal of element 19:");
    print!("{list}");

    Ok(())
}
