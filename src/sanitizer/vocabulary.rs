use std::collections::HashSet;

lazy_static! {
    /// Instruction mnemonics a submission is allowed to contain. Fixed for
    /// the lifetime of the process; anything outside this set is dropped.
    pub static ref MNEMONICS: HashSet<&'static str> = vec![
        // Data transfer
        "MOV", "PUSH", "POP", "PUSHF", "POPF", "IN", "OUT",
        // Arithmetic
        "ADD", "ADC", "SUB", "SBB", "CMP", "NEG", "INC", "DEC",
        // Logical
        "AND", "OR", "XOR", "TEST", "NOT",
        // Interrupts / flags
        "INT", "IRET", "CLI", "STI",
        // Control transfer
        "CALL", "RET", "JC", "JNC", "JZ", "JNZ", "JS", "JNS", "JO", "JNO", "JMP",
        // Misc control
        "NOP", "HLT",
    ]
    .into_iter()
    .collect();

    /// Assembler directives a submission is allowed to contain.
    pub static ref DIRECTIVES: HashSet<&'static str> = vec!["ORG", "DB", "DW", "EQU"]
        .into_iter()
        .collect();
}
