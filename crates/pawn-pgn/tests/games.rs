//! Parsing real tournament games.

use pawn_engine::{Board, Occupancy, Replay, Resolver, ResolverOptions};
use pawn_pgn::{parse, parse_all, Outcome, PgnParser};
use pawn_core::{Color, Material, Piece, Position};

const WIN: &str = r#"
[Event "WCh 2013"]
[Site "Chennai IND"]
[Date "2013.11.21"]
[Round "9"]
[White "Anand,V"]
[Black "Carlsen,M"]
[Result "0-1"]
[WhiteElo "2775"]
[BlackElo "2870"]
[ECO "E25"]

1.d4 Nf6 2.c4 e6 3.Nc3 Bb4 4.f3 d5 5.a3 Bxc3+ 6.bxc3 c5 7.cxd5 exd5 8.e3 c4
9.Ne2 Nc6 10.g4 O-O 11.Bg2 Na5 12.O-O Nb3 13.Ra2 b5 14.Ng3 a5 15.g5 Ne8 16.e4 Nxc1
17.Qxc1 Ra6 18.e5 Nc7 19.f4 b4 20.axb4 axb4 21.Rxa6 Nxa6 22.f5 b3 23.Qf4 Nc7
24.f6 g6 25.Qh4 Ne8 26.Qh6 b2 27.Rf4 b1=Q+ 28.Nf1 Qe1  0-1
"#;

const DRAW: &str = r#"
[Event "WCh 2013"]
[Site "Chennai IND"]
[Date "2013.11.22"]
[Round "10"]
[White "Carlsen,M"]
[Black "Anand,V"]
[Result "1/2-1/2"]
[WhiteElo "2870"]
[BlackElo "2775"]
[ECO "B51"]

1.e4 c5 2.Nf3 d6 3.Bb5+ Nd7 4.d4 cxd4 5.Qxd4 a6 6.Bxd7+ Bxd7 7.c4 Nf6 8.Bg5 e6
9.Nc3 Be7 10.O-O Bc6 11.Qd3 O-O 12.Nd4 Rc8 13.b3 Qc7 14.Nxc6 Qxc6 15.Rac1 h6
16.Be3 Nd7 17.Bd4 Rfd8 18.h3 Qc7 19.Rfd1 Qa5 20.Qd2 Kf8 21.Qb2 Kg8 22.a4 Qh5
23.Ne2 Bf6 24.Rc3 Bxd4 25.Rxd4 Qe5 26.Qd2 Nf6 27.Re3 Rd7 28.a5 Qg5 29.e5 Ne8
30.exd6 Rc6 31.f4 Qd8 32.Red3 Rcxd6 33.Rxd6 Rxd6 34.Rxd6 Qxd6 35.Qxd6 Nxd6
36.Kf2 Kf8 37.Ke3 Ke7 38.Kd4 Kd7 39.Kc5 Kc7 40.Nc3 Nf5 41.Ne4 Ne3 42.g3 f5
43.Nd6 g5 44.Ne8+ Kd7 45.Nf6+ Ke7 46.Ng8+ Kf8 47.Nxh6 gxf4 48.gxf4 Kg7 49.Nxf5+ exf5
50.Kb6 Ng2 51.Kxb7 Nxf4 52.Kxa6 Ne6 53.Kb6 f4 54.a6 f3 55.a7 f2 56.a8=Q f1=Q
57.Qd5 Qe1 58.Qd6 Qe3+ 59.Ka6 Nc5+ 60.Kb5 Nxb3 61.Qc7+ Kh6 62.Qb6+ Qxb6+
63.Kxb6 Kh5 64.h4 Kxh4 65.c5 Nxc5  1/2-1/2
"#;

const EMBEDDED_COMMENTS: &str = r#"
[Event "Baden Baden"]
[Site "Baden Baden DEU"]
[Date "1925.04.17"]
[EventDate "1925.04.16"]
[Round "2"]
[Result "0-1"]
[White "Jan Willem te Kolste"]
[Black "Carlos Torre Repetto"]
[ECO "C12"]
[WhiteElo "?"]
[BlackElo "?"]
[PlyCount "54"]

1. e4 {Notes by Lasker} e6 2. d4 d5 3. Nc3 Nf6 4. Bg5 Bb4
5. Nge2 dxe4 6. a3 Be7 7. Bxf6 gxf6 8. Nxe4 b6 9. N2c3 Bb7
10. Qf3 {Though check with the Knight is now threatened,
White's intention is not aggresive but merely the protection
of the g-pawn.} c6 11. O-O-O f5 12. Ng3 Nd7 13. Bc4 {But here
White begins to be aggresive and therby he puts himself in the
wrong for his aim is not even remotely warranted by his
advantage. Again he should strive to safeguard his g-pawn by
13.Nh5, to be followed by Rg1, and afterwards possibly by h3
and g4 with some little pressure on the center and on the
h-pawn, proportionate to his advantage in mobility.} Qc7 14. Rhe1 Nf6
15. Qe2 O-O-O {Black has defended conscientiously. If White now
continues 16.Nxf5 Qf4+ 17.Ne3 Rxd4 18.Ba6 he can still obtain
equality. But here is the parting of the ways.} 16. Bxe6+ {White
fancies that he holds an advantage and attempts to win. The
punishment is immediate.} fxe6 17. Qxe6+ Rd7 18. Nxf5 Bd8 19. Ne4 Nxe4
20. Rxe4 Kb8 21. g3 Bc8 22. Qh6 Rf7 23. Ne3 Rxf2 24. c3 Rg8
25. d5 Bg5 26. Qxc6 Qxc6 27. dxc6 Bf5 0-1
"#;

const CHECKMATE: &str = r#"
[Event "New Orleans, USA"]
[Site "New Orleans, USA"]
[Date "1927.??.??"]
[EventDate "?"]
[Round "?"]
[Result "0-1"]
[White "Dupre"]
[Black "Carlos Torre Repetto"]
[ECO "C41"]
[WhiteElo "?"]
[BlackElo "?"]
[PlyCount "20"]

1. e4 e5 2. Nf3 d6 3. d4 f5 4. Bc4 exd4 5. exf5 Qe7+ 6. Kd2 g6
7. Re1 Bh6+ 8. Kd3 Bxf5+ 9. Kxd4 Bg7+ 10. Kd5 c6# 0-1
"#;

const MULTIPLE_ENTRIES: &str = r#"
[Event "World Blitz 2016"]
[Site "Doha QAT"]
[Date "2016.12.30"]
[Round "19.1"]
[White "Carlsen,M"]
[Black "Onischuk,V"]
[Result "1-0"]
[WhiteElo "2840"]
[BlackElo "2601"]
[ECO "B07"]

1.e4 d6 2.d4 Nf6 3.Nc3 g6 4.Be3 a6 5.h3 Bg7 6.f4 b5 7.e5 Nfd7 8.Nf3 Nb6 9.Bd3 Bb7
10.O-O e6 11.Be4 Bxe4 12.Nxe4 Nc6 13.Qe2 Qd7 14.Rad1 Nd5 15.c3 f5 16.exf6 Nxf6
17.Nxf6+ Bxf6 18.d5 Ne7 19.f5 exf5 20.Bh6 O-O-O 21.a4 Kb7 22.axb5 axb5 23.Bg5 Bxg5
24.Nxg5 Ra8 25.Ne6 Nc8 26.b3 Nb6 27.c4 Rhe8 28.c5 Nxd5 29.Rxd5 Qxe6 30.Qxb5+ Kc8
31.cxd6 cxd6 32.Qc6+  1-0

[Event "World Blitz 2016"]
[Site "Doha QAT"]
[Date "2016.12.30"]
[Round "20.1"]
[White "Carlsen,M"]
[Black "Anand,V"]
[Result "1-0"]
[WhiteElo "2840"]
[BlackElo "2779"]
[ECO "A45"]

1.d4 Nf6 2.Bf4 d5 3.e3 c5 4.c3 Nc6 5.Nd2 e6 6.Ngf3 Bd6 7.Bg3 O-O 8.Bb5 a6
9.Bxc6 bxc6 10.Qa4 Rb8 11.Qa3 Bxg3 12.hxg3 cxd4 13.cxd4 a5 14.O-O Qb6 15.b3 Ba6
16.Rfc1 Nd7 17.Qd6 Qa7 18.Rxc6 Bb5 19.Rc7 Rb7 20.Rac1 a4 21.Rxb7 Qxb7 22.Rc7 Qb8
23.Rxd7 Bxd7 24.Qxd7  1-0

"#;

#[test]
fn single_games_parse_completely() {
    for text in [WIN, DRAW, EMBEDDED_COMMENTS, CHECKMATE] {
        let record = parse(text).unwrap();
        assert_eq!(record.tags.len(), text.matches('[').count());
        assert!(!record.moves.is_empty());

        let outcome = record.outcome.expect("game has a result");
        assert!(text.trim_end().ends_with(outcome.as_str()));
        assert_eq!(record.tag("Result"), Some(outcome.as_str()));
    }
}

#[test]
fn ply_count_tag_matches() {
    for text in [EMBEDDED_COMMENTS, CHECKMATE] {
        let record = parse(text).unwrap();
        let expected: usize = record.tag("PlyCount").unwrap().parse().unwrap();
        assert_eq!(record.ply_count(), expected);
    }
}

#[test]
fn move_numbers_are_sequential() {
    for text in [WIN, DRAW, EMBEDDED_COMMENTS, CHECKMATE] {
        let record = parse(text).unwrap();
        for (i, m) in record.moves.iter().enumerate() {
            assert_eq!(m.number as usize, i + 1);
        }
    }
}

#[test]
fn draw_ends_on_black_promotion_line() {
    let record = parse(DRAW).unwrap();
    assert_eq!(record.moves.len(), 65);
    assert_eq!(record.moves[55].white.as_deref(), Some("a8=Q"));
    assert_eq!(record.moves[55].black.as_deref(), Some("f1=Q"));
    assert_eq!(record.outcome, Some(Outcome::Draw));
}

#[test]
fn two_concatenated_games() {
    let records = parse_all(MULTIPLE_ENTRIES).unwrap();
    assert_eq!(records.len(), 2);

    assert_eq!(records[0].matchup(), "Carlsen,M vs Onischuk,V");
    assert_eq!(records[0].moves.len(), 32);
    assert_eq!(records[0].moves[31].black, None);

    assert_eq!(records[1].matchup(), "Carlsen,M vs Anand,V");
    assert_eq!(records[1].tag("ECO"), Some("A45"));
    assert_eq!(records[1].moves.len(), 24);

    for record in &records {
        assert_eq!(record.tags.len(), 10);
        assert_eq!(record.outcome, Some(Outcome::WhiteWins));
    }
}

#[test]
fn streaming_from_any_char_source() {
    let owned: Vec<char> = MULTIPLE_ENTRIES.chars().collect();
    let rounds: Vec<String> = PgnParser::new(owned.into_iter())
        .map(|record| record.unwrap().tag("Round").unwrap_or_default().to_string())
        .collect();
    assert_eq!(rounds, ["19.1", "20.1"]);
}

#[test]
fn written_record_parses_back() {
    for text in [WIN, DRAW, EMBEDDED_COMMENTS, CHECKMATE] {
        let record = parse(text).unwrap();
        let written = record.to_string();
        assert!(written.starts_with("[Event "));
        assert!(written.lines().all(|line| line.len() <= 80));
        assert_eq!(parse(&written).unwrap(), record);
    }
}

#[test]
fn serializes_to_json() {
    let record = parse(CHECKMATE).unwrap();
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["outcome"], "0-1");
    assert_eq!(json["tags"]["White"], "Dupre");
    assert_eq!(json["moves"][0]["number"], 1);
    assert_eq!(json["moves"][9]["black"], "c6#");
}

#[test]
fn parsed_game_replays_on_board() {
    let record = parse(CHECKMATE).unwrap();
    let resolver = Resolver::new(ResolverOptions {
        occupancy: Occupancy::Truncated,
        ..ResolverOptions::default()
    });
    let mut replay = Replay::with_resolver(Board::new(), record.turns(), resolver);
    replay.run().unwrap();

    assert_eq!(replay.ply(), 20);
    let board = replay.board();
    let at = |s: &str| board.piece_at(s.parse::<Position>().unwrap());
    assert_eq!(at("d5"), Some(Piece::new(Color::White, Material::King)));
    assert_eq!(at("e1"), Some(Piece::new(Color::White, Material::Rook)));
    assert_eq!(at("h1"), None);
    assert_eq!(at("c6"), Some(Piece::new(Color::Black, Material::Pawn)));
    assert_eq!(at("g7"), Some(Piece::new(Color::Black, Material::Bishop)));
    assert_eq!(at("f5"), Some(Piece::new(Color::Black, Material::Bishop)));
    assert_eq!(at("e7"), Some(Piece::new(Color::Black, Material::Queen)));
}
