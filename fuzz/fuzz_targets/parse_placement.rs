#![no_main]
use libfuzzer_sys::fuzz_target;
use piecemoves::Mailbox;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(board) = Mailbox::try_from(s) {
            let printed = board.to_string();
            assert_eq!(Mailbox::from_placement(&printed).ok(), Some(board));
        }
    }
});
