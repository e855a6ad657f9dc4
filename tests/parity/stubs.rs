
#[test]
fn bad() {
    let fixture = "bad.lox";
    let runner = suite_runner();
    match runner.run(fixture) {
        Ok(_) => panic!("{fixture} should fail but ran cleanly"),
        Err(err) => eprintln!("{fixture} failed as expected: {err}"),
    }
}

#[test]
fn good() {
    let fixture = "good.lox";
    let runner = suite_runner();
    let output = match runner.run(fixture) {
        Ok(output) => output,
        Err(err) => panic!("{fixture} should run cleanly but failed:\n{err}"),
    };
    let expected: &[&str] = &[
        "good",
    ];
    assert_eq!(
        output.lines().collect::<Vec<_>>(),
        expected,
        "{fixture} printed unexpected output"
    );
}

#[test]
fn trailing_blank() {
    let fixture = "trailing_blank.lox";
    let runner = suite_runner();
    let output = match runner.run(fixture) {
        Ok(output) => output,
        Err(err) => panic!("{fixture} should run cleanly but failed:\n{err}"),
    };
    let expected: &[&str] = &[
        "trailing_blank",
        "",
    ];
    assert_eq!(
        output.lines().collect::<Vec<_>>(),
        expected,
        "{fixture} printed unexpected output"
    );
}
