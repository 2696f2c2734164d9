//! Walk a small document: narrow a member to a list, read its elements and
//! render the pieces back out.

use jsondom::{Document, Result};

fn main() -> Result<()> {
    let document = Document::parse(r#"{"foo":[1,"a"], "bar": 1.1}"#)?;

    let foo = document.get("foo")?.as_sequence()?;
    println!("foo.len() -> {}.", foo.len());
    for (i, item) in foo.iter().enumerate() {
        println!("foo[{i}]: {item} ({}).", item.kind());
    }
    println!("foo: {foo}");
    println!("bar: {}", document.get("bar")?.as_number()?);
    println!("document: {document}");

    Ok(())
}
