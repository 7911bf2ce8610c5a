use probemap::{OpenAddressTable, TableConfig};

fn main() -> probemap::Result<()> {
    let config = TableConfig::default()
        .with_initial_capacity(8)
        .with_max_load_ratio(0.5)
        .with_growth_factor(3);
    let mut lor = OpenAddressTable::with_config(config)?;

    lor.set("Hobbit", "Bilbo")?;
    lor.set("Hobbit", "Frodo")?;
    lor.set("Wizard", "Gandalf")?;
    lor.set("Human", "Aragorn")?;
    lor.set("Elf", "Legolas")?;
    lor.set("Maiar", "The Necromancer")?;
    lor.set("Maiar", "Sauron")?;
    lor.set("RingBearer", "Gollum")?;
    lor.set("LadyOfLight", "Galadriel")?;
    lor.set("HalfElven", "Arwen")?;
    lor.set("Ent", "Treebeard")?;

    println!("{lor:?}");
    println!("{:?}", lor.stats());
    println!("Maiar -> {}", lor.get("Maiar")?);
    println!("Hobbit -> {}", lor.get("Hobbit")?);

    // equal strings land on the same key, so the second set overwrites the first
    let str1 = String::from("Hello World.");
    let str2 = String::from("Hello World.");
    let mut map1 = OpenAddressTable::new();
    map1.set(&str1, 10)?;
    map1.set(&str2, 20)?;
    let mut map2 = OpenAddressTable::new();
    map2.set(&str1, 20)?;
    map2.set(&str2, 10)?;
    println!("map1[{str1:?}] = {}", map1.get(&str1)?);
    println!("map2[{str1:?}] = {}", map2.get(&str1)?);

    Ok(())
}
