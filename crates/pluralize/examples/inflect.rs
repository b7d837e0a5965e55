use std::env;

use pluralize::Pluralizer;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let words: Vec<String> = if args.is_empty() {
        vec![
            "person".into(),
            "Wolves".into(),
            "OX".into(),
            "sheep".into(),
            "cactus".into(),
            "日本語".into(),
        ]
    } else {
        args
    };

    let p = Pluralizer::new();
    for word in words {
        println!("\nWord: {word}");
        println!("  plural:      {}", p.plural(&word));
        println!("  singular:    {}", p.singular(&word));
        println!("  is plural:   {}", p.is_plural(&word));
        println!("  is singular: {}", p.is_singular(&word));
        for count in [1, 2] {
            println!("  count {count}:     {}", p.pluralize(&word, count, true));
        }
    }
}
