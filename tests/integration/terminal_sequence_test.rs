//! Feed rendered sequences through a VT parser.
//!
//! Every non-empty rendering must reach the terminal as exactly one CSI `m`
//! dispatch carrying the expected parameters, with nothing printed.

use agrc::color_parse;

#[derive(Default)]
struct SgrRecorder {
    dispatches: Vec<(char, Vec<u16>)>,
    printed: String,
}

impl vte::Perform for SgrRecorder {
    fn print(&mut self, c: char) {
        self.printed.push(c);
    }

    fn execute(&mut self, _byte: u8) {}

    fn hook(&mut self, _params: &vte::Params, _intermediates: &[u8], _ignore: bool, _action: char) {
    }

    fn put(&mut self, _byte: u8) {}

    fn unhook(&mut self) {}

    fn osc_dispatch(&mut self, _params: &[&[u8]], _bell_terminated: bool) {}

    fn esc_dispatch(&mut self, _intermediates: &[u8], _ignore: bool, _byte: u8) {}

    fn csi_dispatch(
        &mut self,
        params: &vte::Params,
        _intermediates: &[u8],
        _ignore: bool,
        action: char,
    ) {
        let params = params
            .iter()
            .map(|p| p.first().copied().unwrap_or(0))
            .collect();
        self.dispatches.push((action, params));
    }
}

fn feed(sequence: &str) -> SgrRecorder {
    let mut parser = vte::Parser::new();
    let mut recorder = SgrRecorder::default();
    parser.advance(&mut recorder, sequence.as_bytes());
    recorder
}

#[test]
fn composed_spec_is_one_sgr_dispatch() {
    let recorder = feed(&color_parse("bold red blue italic"));
    assert_eq!(recorder.dispatches, vec![('m', vec![1, 3, 31, 34])]);
    assert!(recorder.printed.is_empty());
}

#[test]
fn indexed_and_bright_colors() {
    let recorder = feed(&color_parse("brightcyan 236 reverse"));
    assert_eq!(recorder.dispatches, vec![('m', vec![7, 96, 236])]);
}

#[test]
fn empty_spec_sends_nothing() {
    let recorder = feed(&color_parse("   "));
    assert!(recorder.dispatches.is_empty());
    assert!(recorder.printed.is_empty());
}

#[test]
fn worst_case_stays_within_parser_limits() {
    let recorder = feed(&color_parse(
        "255 254 bold dim italic ul blink reverse strike \
         nobold noitalic noul noblink noreverse nostrike",
    ));
    assert_eq!(recorder.dispatches.len(), 1);
    assert_eq!(recorder.dispatches[0].1.len(), 15);
}
