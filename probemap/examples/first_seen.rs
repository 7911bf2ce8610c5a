//! Removes repeated characters from a string, keeping the first occurrence.
//! The table is only used through `set` / `get` as a seen-set.

use probemap::OpenAddressTable;

fn dedupe(input: &str) -> probemap::Result<String> {
    let mut seen = OpenAddressTable::new();
    let mut out = String::with_capacity(input.len());
    let mut buf = [0u8; 4];

    for (pos, c) in input.chars().enumerate() {
        let key: &str = c.encode_utf8(&mut buf);
        if seen.contains_key(key) {
            continue;
        }
        seen.set(key, pos)?;
        out.push(c);
    }
    Ok(out)
}

fn main() -> probemap::Result<()> {
    let inputs = std::env::args().skip(1).collect::<Vec<_>>();
    let inputs = if inputs.is_empty() {
        vec!["google all that you think can think of".to_string()]
    } else {
        inputs
    };

    for input in inputs {
        println!("{input:?} -> {:?}", dedupe(&input)?);
    }
    Ok(())
}
