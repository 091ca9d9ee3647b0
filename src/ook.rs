/// The eight Brainfuck commands and their Ook! phrases. Each phrase
/// carries its own trailing space, so concatenation needs no joiner.
pub const SYMBOL_TABLE: [(char, &str); 8] = [
    ('>', "Ook. Ook? "),
    ('<', "Ook? Ook. "),
    ('+', "Ook. Ook. "),
    ('-', "Ook! Ook! "),
    ('.', "Ook! Ook. "),
    (',', "Ook. Ook! "),
    ('[', "Ook! Ook? "),
    (']', "Ook? Ook! "),
];

/// "Hello World" in Brainfuck, converted when no input is given.
pub const HELLO_WORLD: &str = "++++++++[>++++[>++>+++>+++>+<<<<-]>+>+>->>+[<]<-]>>.>---.+++++++..+++.>>.<-.<.+++.------.--------.>>+.>++.";

pub fn ook_phrase(c: char) -> Option<&'static str> {
    SYMBOL_TABLE
        .iter()
        .find(|(cmd, _)| *cmd == c)
        .map(|(_, phrase)| *phrase)
}

/// Converts Brainfuck text into one Ook! string. Characters outside
/// the command set are dropped silently; everything else keeps its
/// source order. Never fails.
pub fn bf_to_ook(text: &str) -> String {
    text.chars().filter_map(ook_phrase).collect::<String>()
}
