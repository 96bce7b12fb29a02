use std::{error::Error, fs};

use voidlang::{
    error::{LexerError, ParseError, RuntimeError},
    interpreter::evaluator::io::CaptureConsole,
    run_script, strip_after_end_marker,
};
use walkdir::WalkDir;

const SEED: u64 = 42;

/// Removes ANSI escape sequences, leaving the text the user actually
/// reads.
fn strip_ansi(text: &str) -> String {
    let mut out = String::new();
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            for escaped in chars.by_ref() {
                if escaped == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

fn run_source(source: &str) -> Result<String, Box<dyn Error>> {
    let mut console = CaptureConsole::new();
    run_script(source, &mut console, SEED)?;
    Ok(strip_ansi(console.output()))
}

fn wrap(statements: &str) -> String {
    format!("@VoidApp \"T\"; main() {{ {statements} }} @VoidEnd;")
}

/// Runs statements inside the standard program shell and returns the
/// printed lines between the banner header and footer.
fn run_main(statements: &str) -> Vec<String> {
    let output = run_source(&wrap(statements)).expect("script failed");
    output.lines()
          .filter(|line| !line.starts_with("═══"))
          .map(ToString::to_string)
          .collect()
}

/// Runs statements inside the standard program shell and returns the
/// error they raise.
fn run_err(statements: &str) -> Box<dyn Error> {
    run_source(&wrap(statements)).expect_err("script succeeded but was expected to fail")
}

fn assert_runtime_err(statements: &str, matches: impl Fn(&RuntimeError) -> bool) {
    let error = run_err(statements);
    let runtime = error.downcast_ref::<RuntimeError>()
                       .unwrap_or_else(|| panic!("expected a runtime error, got: {error}"));
    assert!(matches(runtime), "unexpected runtime error: {runtime}");
}

#[test]
fn hello_between_banner_lines() {
    let output = run_source("@VoidApp \"H\"; main(){ echo(\"Hello\"); } @VoidEnd;").unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], "═══ H ═══");
    assert!(lines.contains(&"Hello"));
    assert_eq!(lines[lines.len() - 1], "═══ Конец ═══");
}

#[test]
fn arithmetic_precedence() {
    assert_eq!(run_main("echo(1 + 2 * 3);"), ["7"]);
    assert_eq!(run_main("echo(2 ** 3 ** 2);"), ["512"]);
    assert_eq!(run_main("echo((1 + 2) * 3);"), ["9"]);
    assert_eq!(run_main("echo(10 - 2 - 3);"), ["5"]);
}

#[test]
fn division_and_modulo() {
    assert_eq!(run_main("echo(7 / 2);"), ["3.5"]);
    assert_eq!(run_main("echo(10 / 2);"), ["5"]);
    assert_eq!(run_main("echo(10 % 3);"), ["1"]);
}

#[test]
fn unary_operators() {
    assert_eq!(run_main("echo(-5 + 2);"), ["-3"]);
    assert_eq!(run_main("echo(!true);"), ["false"]);
    assert_eq!(run_main("echo(!-0);"), ["true"]);
}

#[test]
fn logical_operators_return_booleans() {
    assert_eq!(run_main("echo(true && false);"), ["false"]);
    assert_eq!(run_main("echo(1 || 0);"), ["true"]);
    assert_eq!(run_main("echo(\"\" && true);"), ["false"]);
}

#[test]
fn logical_operators_evaluate_both_sides() {
    // No short-circuit: the write() on the right of && runs even though
    // the left side is already false.
    let source = wrap("create:bool b = false && toBool(write(\"ask: \")); echo(b);");
    let mut console = CaptureConsole::with_input(&["yes"]);
    run_script(&source, &mut console, SEED).unwrap();

    let output = strip_ansi(console.output());
    assert!(output.contains("ask: "));
    assert!(output.contains("false"));
}

#[test]
fn comparisons_coerce_to_numbers() {
    assert_eq!(run_main("echo(1 < 2);"), ["true"]);
    assert_eq!(run_main("echo(\"10\" > 5);"), ["true"]);
    assert_eq!(run_main("echo(2 <= 2);"), ["true"]);
    assert_eq!(run_main("echo(true > 0);"), ["true"]);
}

#[test]
fn equality_rules() {
    assert_eq!(run_main("echo(1 == 1.0);"), ["true"]);
    assert_eq!(run_main("echo(true == 1);"), ["true"]);
    assert_eq!(run_main("echo(\"7\" == 7);"), ["true"]);
    assert_eq!(run_main("echo(1 != 2);"), ["true"]);
    assert_eq!(run_main("echo([1] == [1]);"), ["false"]);
    assert_eq!(run_main("create:list a = [1]; create:list b = a; echo(a == b);"),
               ["true"]);
}

#[test]
fn string_concatenation() {
    assert_eq!(run_main("echo(\"a\" + 1);"), ["a1"]);
    assert_eq!(run_main("echo(1 + \"a\");"), ["1a"]);
    assert_eq!(run_main("echo(\"x\" + true);"), ["xtrue"]);
}

#[test]
fn echo_joins_arguments_with_spaces() {
    assert_eq!(run_main("echo(1, 2.5, \"x\", false);"), ["1 2.5 x false"]);
}

#[test]
fn for_loop_sum() {
    let lines = run_main(
        "create:int s = 0; for(create:int i = 1; i <= 5; i = i + 1){ s = s + i; } echo(s);",
    );
    assert_eq!(lines, ["15"]);
}

#[test]
fn while_loop_counts_down() {
    assert_eq!(run_main("create:int n = 5; while(n > 0){ n = n - 1; } echo(n);"),
               ["0"]);
}

#[test]
fn for_loop_header_scope_is_released() {
    assert_runtime_err("for(create:int i = 0; i < 1; i = i + 1){} echo(i);",
                       |e| matches!(e, RuntimeError::UnknownVariable { name, .. } if name == "i"));
}

#[test]
fn if_else_chain() {
    let program = "create:int x = 2;
                   if (x == 1) { echo(\"one\"); }
                   else if (x == 2) { echo(\"two\"); }
                   else { echo(\"many\"); }";
    assert_eq!(run_main(program), ["two"]);
}

#[test]
fn block_scope_discipline() {
    assert_runtime_err("if (true) { create:int tmp = 1; } echo(tmp);",
                       |e| matches!(e, RuntimeError::UnknownVariable { .. }));
}

#[test]
fn inner_scopes_may_shadow_outer_names() {
    let program = "create:int x = 1; if (true) { create:int x = 2; echo(x); } echo(x);";
    assert_eq!(run_main(program), ["2", "1"]);
}

#[test]
fn redefinition_in_same_scope_is_rejected() {
    assert_runtime_err("create:int x = 1; create:int x = 2;",
                       |e| matches!(e, RuntimeError::Redefinition { name, .. } if name == "x"));
    assert_runtime_err("create:list a = [1]; create:list b = a; create:list b = [2];",
                       |e| matches!(e, RuntimeError::Redefinition { name, .. } if name == "b"));
}

#[test]
fn list_methods() {
    let program = "create:list L = [1, 2, 3];
                   L.add:list(4);
                   L.delete:list(0);
                   echo(L);
                   echo(length(L));";
    assert_eq!(run_main(program), ["[2, 3, 4]", "3"]);
}

#[test]
fn list_delete_accepts_negative_indices() {
    assert_eq!(run_main("create:list L = [1, 2, 3]; L.delete:list(-1); echo(L);"),
               ["[1, 2]"]);
}

#[test]
fn list_clear() {
    assert_eq!(run_main("create:list L = [1, 2]; L.clear:list(); echo(L, length(L));"),
               ["[] 0"]);
}

#[test]
fn dict_add_replaces_in_place() {
    let program = "create:dict D = {\"a\": 1};
                   D.add:dict(\"b\": 2);
                   D.add:dict(\"a\": 9);
                   echo(D);
                   echo(D[\"a\"]);";
    assert_eq!(run_main(program), ["{a:9, b:2}", "9"]);
}

#[test]
fn dict_keys_unique_under_loose_equality() {
    let program = "create:dict D = {};
                   D.add:dict(1: \"a\");
                   D.add:dict(1.0: \"b\");
                   D.add:dict(true: \"c\");
                   echo(length(D));";
    assert_eq!(run_main(program), ["1"]);
}

#[test]
fn dict_delete_and_missing_key() {
    assert_eq!(run_main("create:dict D = {\"a\": 1, \"b\": 2}; D.delete:dict(\"a\"); echo(D);"),
               ["{b:2}"]);
    assert_runtime_err("create:dict D = {}; echo(D[\"nope\"]);",
                       |e| matches!(e, RuntimeError::MissingKey { .. }));
    assert_runtime_err("create:dict D = {}; D.delete:dict(\"nope\");",
                       |e| matches!(e, RuntimeError::MissingKey { .. }));
}

#[test]
fn method_calls_recheck_binding_shape() {
    assert_runtime_err("create:list L = [1]; L.add:dict(\"k\": 1);",
                       |e| matches!(e, RuntimeError::TypeError { .. }));
}

#[test]
fn reference_semantics_for_collections() {
    let program = "create:list a = [1];
                   create:list b = a;
                   b.add:list(2);
                   echo(a);";
    assert_eq!(run_main(program), ["[1, 2]"]);

    let dicts = "create:dict d = {\"k\": 1};
                 create:dict e = d;
                 e.add:dict(\"k\": 2);
                 echo(d);";
    assert_eq!(run_main(dicts), ["{k:2}"]);
}

#[test]
fn string_indexing_and_negatives() {
    assert_eq!(run_main("create:string s = \"abc\"; echo(s[-1]);"), ["c"]);
    assert_eq!(run_main("create:string s = \"abc\"; echo(s[0]);"), ["a"]);
    assert_runtime_err("create:string s = \"abc\"; echo(s[3]);",
                       |e| matches!(e, RuntimeError::IndexOutOfBounds { index: 3, len: 3, .. }));
}

#[test]
fn list_index_round_trip() {
    assert_eq!(run_main("create:list L = [1, 2, 3]; L[1] = 9; echo(L[1], L);"),
               ["9 [1, 9, 3]"]);
    assert_eq!(run_main("create:list L = [1, 2, 3]; L[-1] = 7; echo(L);"),
               ["[1, 2, 7]"]);
}

#[test]
fn dict_indexed_assignment_inserts_or_replaces() {
    assert_eq!(run_main("create:dict D = {\"a\": 1}; D[\"b\"] = 2; D[\"a\"] = 3; echo(D);"),
               ["{a:3, b:2}"]);
}

#[test]
fn string_elements_are_immutable() {
    assert_runtime_err("create:string s = \"abc\"; s[0] = \"z\";",
                       |e| matches!(e, RuntimeError::TypeError { .. }));
}

#[test]
fn nested_indexing_chains() {
    assert_eq!(run_main("create:list grid = [[1, 2], [3, 4]]; echo(grid[1][0]);"),
               ["3"]);
}

#[test]
fn assignment_coerces_to_declared_type() {
    assert_eq!(run_main("create:int x = 0; x = \"12\"; echo(x);"), ["12"]);
    assert_eq!(run_main("create:int x = 0; x = 3.9; echo(x);"), ["3"]);
    assert_eq!(run_main("create:int x = 0; x = -1.5; echo(x);"), ["-2"]);
    assert_eq!(run_main("create:int x = 0; x = true; echo(x);"), ["1"]);
    assert_eq!(run_main("create:string s = 5; echo(s + \"!\");"), ["5!"]);
    assert_eq!(run_main("create:bool b = \"x\"; echo(b);"), ["true"]);
    assert_eq!(run_main("create:float f = \"2.5\"; echo(f);"), ["2.5"]);
}

#[test]
fn collection_bindings_reject_non_matching_shapes() {
    assert_runtime_err("create:list L = 5;",
                       |e| matches!(e, RuntimeError::TypeError { .. }));
    assert_runtime_err("create:dict D = [1];",
                       |e| matches!(e, RuntimeError::TypeError { .. }));
    assert_runtime_err("create:list L = [1]; L = 5;",
                       |e| matches!(e, RuntimeError::TypeError { .. }));
}

#[test]
fn non_numeric_coercion_is_fatal() {
    assert_runtime_err("echo(\"abc\" < 1);",
                       |e| matches!(e, RuntimeError::ExpectedNumber { .. }));
    assert_runtime_err("create:int x = \"abc\";",
                       |e| matches!(e, RuntimeError::ExpectedNumber { .. }));
}

#[test]
fn division_by_zero_aborts_without_footer() {
    let source = wrap("create:int x = 1 / 0;");
    let mut console = CaptureConsole::new();
    let error = run_script(&source, &mut console, SEED).unwrap_err();

    let runtime = error.downcast_ref::<RuntimeError>().expect("runtime error");
    assert!(matches!(runtime, RuntimeError::DivisionByZero { .. }));
    assert!(!console.output().contains("Конец"));
}

#[test]
fn modulo_by_zero_is_fatal() {
    assert_runtime_err("echo(1 % 0);",
                       |e| matches!(e, RuntimeError::DivisionByZero { .. }));
}

#[test]
fn builtins_numeric() {
    assert_eq!(run_main("echo(abs(-3));"), ["3"]);
    assert_eq!(run_main("echo(sqrt(9));"), ["3"]);
    assert_eq!(run_main("echo(floor(3.7));"), ["3"]);
    assert_eq!(run_main("echo(ceil(3.2));"), ["4"]);
    assert_eq!(run_main("echo(round(2.4));"), ["2"]);
    assert_eq!(run_main("echo(min(2, 7), max(2, 7));"), ["2 7"]);
}

#[test]
fn builtins_conversions() {
    assert_eq!(run_main("echo(toInt(\"42\"));"), ["42"]);
    assert_eq!(run_main("echo(toInt(\"oops\"));"), ["0"]);
    assert_eq!(run_main("echo(toInt(3.7));"), ["3"]);
    assert_eq!(run_main("echo(toFloat(\"2.5\"));"), ["2.5"]);
    assert_eq!(run_main("echo(toFloat(\"oops\"));"), ["0"]);
    assert_eq!(run_main("echo(toString(12) + \"!\");"), ["12!"]);
    assert_eq!(run_main("echo(toBool(\"\"), toBool(\"x\"));"), ["false true"]);
}

#[test]
fn builtins_strings_and_collections() {
    assert_eq!(run_main("echo(length(\"abc\"));"), ["3"]);
    assert_eq!(run_main("echo(length([1, 2]));"), ["2"]);
    assert_eq!(run_main("echo(upper(\"hey\"), lower(\"HEY\"));"), ["HEY hey"]);
    assert_eq!(run_main("echo(trim(\"  pad  \") + \"!\");"), ["pad!"]);
    assert_eq!(run_main("echo(contains(\"hello\", \"ell\"));"), ["true"]);
    assert_eq!(run_main("echo(contains([1, 2, 3], 2));"), ["true"]);
    assert_eq!(run_main("echo(contains([1, 2, 3], 9));"), ["false"]);
}

#[test]
fn statement_position_calls_discard_their_value() {
    assert_eq!(run_main("toInt(\"1\"); echo(\"done\");"), ["done"]);
}

#[test]
fn unknown_function_and_arity_errors() {
    assert_runtime_err("frobnicate(1);",
                       |e| matches!(e, RuntimeError::UnknownFunction { name, .. } if name == "frobnicate"));
    assert_runtime_err("echo(length());",
                       |e| matches!(e, RuntimeError::ArgumentCountMismatch { .. }));
    assert_runtime_err("echo(min(1));",
                       |e| matches!(e, RuntimeError::ArgumentCountMismatch { .. }));
    assert_runtime_err("create:list L = [1]; L.add:list();",
                       |e| matches!(e, RuntimeError::ArgumentCountMismatch { .. }));
}

#[test]
fn rand_is_bounded_and_misuse_is_fatal() {
    assert_eq!(run_main("create:int r = rand(1, 10); echo(r >= 1 && r <= 10);"),
               ["true"]);
    assert_eq!(run_main("echo(rand(3, 3));"), ["3"]);
    assert_eq!(run_main("create:float u = random(); echo(u >= 0 && u < 1);"),
               ["true"]);
    assert_runtime_err("echo(rand(5, 1));",
                       |e| matches!(e, RuntimeError::InvalidRandRange { min: 5, max: 1, .. }));
    assert_runtime_err("echo(rand(\"a\", 2));",
                       |e| matches!(e, RuntimeError::ExpectedNumber { .. }));
}

#[test]
fn output_is_deterministic_for_a_fixed_seed() {
    let program = "for(create:int i = 0; i < 5; i = i + 1){ echo(rand(1, 100), random()); }";
    let first = run_main(program);
    let second = run_main(program);
    assert_eq!(first, second);
}

#[test]
fn write_prompts_and_reads_one_line() {
    let source = wrap("create:string name = write(\"Who? \"); echo(\"Hello \" + name);");
    let mut console = CaptureConsole::with_input(&["World"]);
    run_script(&source, &mut console, SEED).unwrap();

    let output = strip_ansi(console.output());
    assert!(output.contains("Who? "));
    assert!(output.contains("Hello World"));
}

#[test]
fn iteration_ceiling_stops_runaway_loops() {
    assert_runtime_err("while(true){}",
                       |e| matches!(e, RuntimeError::IterationLimitExceeded { .. }));
    assert_runtime_err("for(;;){}",
                       |e| matches!(e, RuntimeError::IterationLimitExceeded { .. }));
}

#[test]
fn comments_are_ignored() {
    let program = "echo(1); // a line comment\n #* a block\n comment *# echo(2);";
    assert_eq!(run_main(program), ["1", "2"]);
}

#[test]
fn string_escapes_and_quotes() {
    assert_eq!(run_main("echo(\"a\\tb\");"), ["a\tb"]);
    assert_eq!(run_main("echo('single');"), ["single"]);
    assert_eq!(run_main("echo(\"q:\\\"\");"), ["q:\""]);
    assert_eq!(run_main("echo(\"\\x\");"), ["x"]);
}

#[test]
fn style_directive_is_cosmetic_only() {
    let source = "@VoidApp \"S\"; using style \"green\"; main(){ echo(\"ok\"); } @VoidEnd;";
    let output = run_source(source).unwrap();
    assert!(output.lines().any(|line| line == "ok"));
}

#[test]
fn end_marker_is_optional_and_trailing_tokens_are_rejected() {
    assert!(run_source("@VoidApp \"A\"; main(){ echo(1); }").is_ok());

    let error = run_source("@VoidApp \"A\"; main(){} @VoidEnd; echo(1);").unwrap_err();
    assert!(matches!(error.downcast_ref::<ParseError>(),
                     Some(ParseError::UnexpectedTrailingTokens { .. })));
}

#[test]
fn driver_truncation_hides_text_after_the_marker() {
    let source = "@VoidApp \"A\"; main(){ echo(1); } @VoidEnd; anything ~~ goes";
    let truncated = strip_after_end_marker(source);
    assert!(run_source(truncated).is_ok());
}

#[test]
fn exactly_one_main_block_is_required() {
    assert!(matches!(run_source("@VoidApp \"A\"; @VoidEnd;").unwrap_err()
                                                            .downcast_ref::<ParseError>(),
                     Some(ParseError::MissingMainBlock { .. })));
    assert!(matches!(run_source("@VoidApp \"A\";").unwrap_err().downcast_ref::<ParseError>(),
                     Some(ParseError::MissingMainBlock { .. })));
    assert!(matches!(run_source("@VoidApp \"A\"; main(){} main(){} @VoidEnd;").unwrap_err()
                                                                              .downcast_ref::<ParseError>(),
                     Some(ParseError::ExpectedToken { .. })));
}

#[test]
fn parse_errors() {
    assert!(matches!(run_source("main(){}").unwrap_err().downcast_ref::<ParseError>(),
                     Some(ParseError::InvalidHeader { .. })));
    assert!(matches!(run_source(&wrap("echo(1)")).unwrap_err().downcast_ref::<ParseError>(),
                     Some(ParseError::ExpectedToken { .. })));
    assert!(matches!(run_source(&wrap("create:widget x = 1;")).unwrap_err()
                                                              .downcast_ref::<ParseError>(),
                     Some(ParseError::ExpectedTypeName { .. })));
    assert!(matches!(run_source("@VoidApp \"A\"; echo(1);").unwrap_err()
                                                           .downcast_ref::<ParseError>(),
                     Some(ParseError::ExpectedToken { .. })));
}

#[test]
fn lexer_errors_carry_positions() {
    let error = run_source("@VoidApp \"A\";\nmain(){ echo(1 & 2); }").unwrap_err();
    match error.downcast_ref::<LexerError>() {
        Some(LexerError::UnexpectedCharacter { found, line, .. }) => {
            assert_eq!(found, "&");
            assert_eq!(*line, 2);
        },
        other => panic!("expected an unexpected-character error, got {other:?}"),
    }

    assert!(matches!(run_source(&wrap("echo(\"open);")).unwrap_err()
                                                       .downcast_ref::<LexerError>(),
                     Some(LexerError::UnterminatedString { .. })));
    assert!(matches!(run_source("@VoidApp \"A\"; #* never closed").unwrap_err()
                                                                  .downcast_ref::<LexerError>(),
                     Some(LexerError::UnterminatedComment { .. })));
    assert!(matches!(run_source("@VoidWat \"A\";").unwrap_err().downcast_ref::<LexerError>(),
                     Some(LexerError::UnknownDirective { name, .. }) if name == "@VoidWat"));
}

#[test]
fn demo_scripts_run_clean() {
    let mut count = 0;

    for entry in WalkDir::new("demos").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "void"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        match run_source(strip_after_end_marker(&source)) {
            Ok(output) => assert!(output.contains("Конец"), "{path:?} produced no footer"),
            Err(e) => panic!("Demo script {path:?} failed: {e}"),
        }
    }

    assert!(count > 0, "No demo scripts found in demos/");
}
