use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::Path;
use std::rc::Rc;

use serde_json;
use structopt::StructOpt;

use otsdb::cliopt::CliOpt;
use otsdb::output::{LineWriter, Output, Writer};
use otsdb::runner::Runner;

// Every directory under tests/scenarios holds:
//   args.json - command line arguments, program name included
//   input     - the blob fed to stdin
//   output    - expected stdout, or
//   error     - expected error message (stdout must stay empty)
#[test]
fn e2e() -> Result<(), Box<dyn std::error::Error>> {
    let root_test_dir = Path::new(file!()).parent().unwrap().join("scenarios");

    let mut cases = 0;
    for test_dir in fs::read_dir(&root_test_dir)? {
        let test_dir = test_dir?.path();

        if let Ok(filter) = std::env::var("E2E_CASE") {
            if !test_dir.as_os_str().to_string_lossy().ends_with(&filter) {
                continue;
            }
        }

        let cli_args: Vec<String> =
            serde_json::from_str(&fs::read_to_string(test_dir.join("args.json"))?)?;

        let (actual_output, actual_error) =
            run(fs::File::open(test_dir.join("input"))?, &cli_args);

        let expected_error = test_dir.join("error");
        if expected_error.exists() {
            let expected_error = fs::read_to_string(expected_error)?;
            assert_eq!(
                Some(expected_error.trim_end().to_owned()),
                actual_error,
                "\nUnexpected error in '{}'.",
                test_dir.display(),
            );
            assert!(
                actual_output.is_empty(),
                "\nPartial output in '{}':\n{}",
                test_dir.display(),
                String::from_utf8_lossy(&actual_output),
            );
        } else {
            let expected_output = fs::read(test_dir.join("output"))?;
            assert_eq!(
                None,
                actual_error,
                "\nUnexpected error in '{}'.",
                test_dir.display()
            );
            assert_eq!(
                expected_output,
                actual_output,
                "\nUnexpected output in '{}'.\nExpected:\n{}\nActual:\n{}",
                test_dir.display(),
                String::from_utf8_lossy(&expected_output),
                String::from_utf8_lossy(&actual_output),
            );
        }

        cases += 1;
    }

    assert!(cases > 0, "no e2e scenarios found");
    Ok(())
}

fn run(input: fs::File, cli_args: &[String]) -> (Vec<u8>, Option<String>) {
    let opt = CliOpt::from_iter(cli_args);

    let writer = Rc::new(RefCell::new(LineWriter::new(Vec::new())));

    struct TestWriter<W>(Rc<RefCell<W>>);

    impl<W: Writer> Writer for TestWriter<W> {
        fn write(&mut self, buf: &[u8]) -> io::Result<()> {
            self.0.borrow_mut().write(buf)
        }
    }

    let output = Output::new(Box::new(TestWriter(Rc::clone(&writer))), opt.encoder());

    let mut runner = Runner::new(Box::new(input), output);
    let error = runner.run().err().map(|e| e.to_string());

    // To make Rc::try_unwrap(writer) work.
    drop(runner);

    let writer = match Rc::try_unwrap(writer) {
        Ok(writer) => writer,
        _ => unreachable!(),
    };

    (writer.into_inner().into_inner(), error)
}
