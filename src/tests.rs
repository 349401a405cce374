#[cfg(test)]
mod tests {
    use crate::board::{winner_of, Board, Glyphs, ParseBoardError};
    use crate::cell::Colour;
    use crate::orientation::Orientation;

    #[test]
    fn no_stones_no_winner() {
        assert_eq!(winner_of(&["...", "...", "..."]), Ok(None));
    }

    #[test]
    fn no_lines_is_an_error() {
        assert_eq!(winner_of::<&str>(&[]), Err(ParseBoardError::NoLines));
    }

    #[test]
    fn empty_first_line_is_an_error() {
        assert_eq!(winner_of(&[""]), Err(ParseBoardError::EmptyFirstLine));
        // later rows cannot rescue an undeterminable width
        assert_eq!(winner_of(&["", "XX"]), Err(ParseBoardError::EmptyFirstLine));
    }

    #[test]
    fn single_cell_boards() {
        // the start and target edges coincide, so one stone is a full chain
        assert_eq!(winner_of(&["X"]), Ok(Some(Colour::Black)));
        assert_eq!(winner_of(&["O"]), Ok(Some(Colour::White)));
        assert_eq!(winner_of(&["."]), Ok(None));
    }

    #[test]
    fn black_row_spans_despite_distractions() {
        let lines = [
            "XXXX",
            "O.O.",
            "..X.",
            "OO..",
        ];
        assert_eq!(winner_of(&lines), Ok(Some(Colour::Black)));
    }

    #[test]
    fn white_column_spans_despite_distractions() {
        let lines = [
            "OX.",
            "O.X",
            "O..",
        ];
        assert_eq!(winner_of(&lines), Ok(Some(Colour::White)));
    }

    #[test]
    fn anti_diagonal_is_a_chain() {
        // (2, 0), (1, 1), (0, 2) touch via the (-1, +1) step
        let lines = [
            "..X",
            ".X.",
            "X..",
        ];
        assert_eq!(winner_of(&lines), Ok(Some(Colour::Black)));
    }

    #[test]
    fn main_diagonal_is_not_a_chain() {
        // black's (0, 0), (1, 1), (2, 2) are mutually non-adjacent; white's band
        // runs (1, 0) -> (0, 1) -> (0, 2) and wins top to bottom
        let lines = [
            "XOO",
            "OXO",
            "OOX",
        ];
        assert_eq!(winner_of(&lines), Ok(Some(Colour::White)));
    }

    #[test]
    fn winding_chain_wins() {
        // black snakes (0,2), (1,2), (2,1), (3,1), (4,0); white never reaches
        // the bottom row
        let lines = [
            "..OOX",
            "OOXXO",
            "XX.OO",
        ];
        assert_eq!(winner_of(&lines), Ok(Some(Colour::Black)));
    }

    #[test]
    fn ring_of_stones_terminates() {
        // a closed black ring around (1, 1); the walk must revisit its starting
        // stone without recurring and report no winner
        let lines = [
            ".XX.",
            "X.X.",
            "XX..",
            "....",
        ];
        assert_eq!(winner_of(&lines), Ok(None));
    }

    #[test]
    fn ragged_rows_read_as_empty() {
        assert_eq!(winner_of(&["XX", "X"]), Ok(Some(Colour::Black)));
        // (1, 0) links down to (0, 1) across the missing tail of row 1
        assert_eq!(winner_of(&[".O", "O"]), Ok(Some(Colour::White)));
    }

    #[test]
    fn fresh_parses_agree() {
        for lines in [
            vec!["...", "...", "..."],
            vec!["XOO", "OXO", "OOX"],
            vec![".XX.", "X.X.", "XX..", "...."],
            vec!["XXXX", "O.O.", "..X.", "OO.."],
        ] {
            assert_eq!(winner_of(&lines), winner_of(&lines));
        }
    }

    #[test]
    fn custom_glyphs() {
        let lines = [
            "bww",
            "wbw",
            "wwb",
        ];
        let board = Board::parse_with(Glyphs { black: 'b', white: 'w' }, &lines).unwrap();
        assert_eq!(board.winner(), Some(Colour::White));

        // under the default glyphs the same text is all empty cells
        assert_eq!(winner_of(&lines), Ok(None));
    }

    #[test]
    fn dump_skews_rows() {
        let board = Board::parse(&[".X", "O."]).unwrap();
        assert_eq!(format!("{}", board), ". x
 o .
");
    }

    #[test]
    fn dump_uppercases_linked_stones() {
        let mut board = Board::parse(&["XX", "OO"]).unwrap();
        assert!(board.trace_chain(Orientation::from(Colour::Black)));
        // black's pass linked its own stones and left white's flags alone
        assert_eq!(format!("{}", board), "X X
 o o
");
    }

    #[test]
    fn error_messages() {
        assert_eq!(ParseBoardError::NoLines.to_string(), "no lines given");
        assert_eq!(ParseBoardError::EmptyFirstLine.to_string(), "first line is empty");
    }

    #[test]
    fn colour_displays_as_result_string() {
        assert_eq!(Colour::Black.to_string(), "black");
        assert_eq!(Colour::White.to_string(), "white");
    }
}
