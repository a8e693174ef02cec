use minelang::{transpile, MineError};

// ============================================================================
// BASIC TRANSLATION
// ============================================================================

#[test]
fn test_function_one_liner() {
    let py = transpile("OPERACAO soma(a, b) { RETORNAR_STATUS a INTENSIFICAR b }").unwrap();
    assert_eq!(py, "def soma(a, b):\n    return a + b\n");
}

#[test]
fn test_operators_and_print() {
    let source = r#"
        total MARCAR_AREA 10 AMPLIFICAR 2 DISTRIBUIR_RECURSOS 4
        ALERTAR_EQUIPE("total:", total)
    "#;
    let py = transpile(source).unwrap();
    assert!(py.contains("total = 10 * 2 / 4\n"));
    assert!(py.contains("print(\"total:\", total)\n"));
}

#[test]
fn test_full_program() {
    let source = r#"
# verifica o nivel de gas
OPERACAO verificar(nivel) {
    SE_RISCO nivel >= 50 {
        ALERTAR_EQUIPE("evacuar")
        RETORNAR_STATUS 1
    } SENAO_OPERADOR {
        ALERTAR_EQUIPE("seguro")
    }
    RETORNAR_STATUS 0
}

contador MARCAR_AREA 3
ENQUANTO_ESCANEANDO contador > 0 {
    verificar(contador AMPLIFICAR 20)
    contador MARCAR_AREA contador DESATIVAR 1
}
"#;
    let py = transpile(source).unwrap();
    let lines: Vec<_> = py.lines().filter(|l| !l.trim().is_empty()).collect();
    assert_eq!(
        lines,
        vec![
            "def verificar(nivel):",
            "    if nivel >= 50:",
            "        print(\"evacuar\")",
            "        return 1",
            "    else:",
            "        print(\"seguro\")",
            "    return 0",
            "contador = 3",
            "while contador > 0:",
            "    verificar(contador * 20)",
            "    contador = contador - 1",
        ]
    );
    assert!(py.ends_with("contador - 1\n"));
}

#[test]
fn test_else_at_same_level_as_if() {
    let py = transpile("SE_RISCO a { b } SENAO_OPERADOR { c }").unwrap();
    assert_eq!(py, "if a:\n    b\nelse:\n    c\n");
}

#[test]
fn test_header_split_across_lines() {
    let py = transpile("SE_RISCO x\ny {\n}").unwrap();
    assert_eq!(py, "if x y:\n");
}

#[test]
fn test_escaped_quote_preserved() {
    let py = transpile(r#"ALERTAR_EQUIPE("a\"b")"#).unwrap();
    assert_eq!(py, "print(\"a\\\"b\")\n");
}

#[test]
fn test_keyword_free_input_is_stable() {
    let source = "x = [1, 2.5, \"s\"]\ny = x[0] ** 2 // 3\n";
    let once = transpile(source).unwrap();
    assert_eq!(once, source);
    assert_eq!(transpile(&once).unwrap(), once);
}

#[test]
fn test_whitespace_is_normalized() {
    let py = transpile("a   MARCAR_AREA\t b    \r\n").unwrap();
    assert_eq!(py, "a = b\n");
}

#[test]
fn test_output_ends_with_single_newline() {
    let py = transpile("a\n\n\n\n").unwrap();
    assert_eq!(py, "a\n");
}

// ============================================================================
// ERRORS
// ============================================================================

#[test]
fn test_misspelled_keyword() {
    let err = transpile("OPERACAO f() {\n    RETORNA_STATUS 1\n}").unwrap_err();
    assert!(err.is_lexical());
    let loc = err.location().unwrap();
    assert_eq!((loc.line, loc.column), (2, 5));
    assert!(err.to_string().contains("RETORNA_STATUS"));
}

#[test]
fn test_unmatched_close_brace() {
    let err = transpile("a\n}\n").unwrap_err();
    assert!(matches!(err, MineError::Translation { .. }));
    assert_eq!(err.location().map(|l| l.line), Some(2));
}

#[test]
fn test_unclosed_block() {
    let err = transpile("SE_RISCO a {\n  b\n").unwrap_err();
    assert!(err.is_translation());
}

#[test]
fn test_header_without_brace() {
    let err = transpile("SE_RISCO a\nb\n").unwrap_err();
    assert!(err.is_translation());
    assert_eq!(err.location().map(|l| (l.line, l.column)), Some((1, 1)));
}

#[test]
fn test_invalid_character() {
    let err = transpile("a MARCAR_AREA @").unwrap_err();
    assert!(err.is_lexical());
    assert_eq!(err.location().map(|l| l.column), Some(15));
}
