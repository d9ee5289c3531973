//! The same statements rendered for MySQL (`?`), Oracle (`:n`) and the
//! generic `?` dialect.

use sqltag::{AppendOptions, Dialect, SqlError, Slot, Statement, Value, quote_identifier, sql};

fn team_update() -> Statement {
    let name = "Team 5";
    let description = "description";
    let team_id = 7;
    let organization_id = "WONKA";

    let mut q = sql!(
        "UPDATE teams SET name = {}, description = {} ",
        name,
        description
    );
    q.append(sql!(
        "WHERE id = {} AND org_id = {}",
        team_id,
        organization_id
    ));
    q
}

fn team_values() -> Vec<Value> {
    vec![
        Value::from("Team 5"),
        Value::from("description"),
        Value::Int(7),
        Value::from("WONKA"),
    ]
}

fn glued_pieces() -> Statement {
    let updates = vec![
        sql!("v1 = {}", "v1"),
        sql!("v2 = {}", "v2"),
        sql!("v3 = {}", "v3"),
        sql!("v4 = {}", "v4"),
        sql!("v5 = {}", "v5"),
    ];

    let mut q = sql!("TEST QUERY glue pieces FROM ");
    q.append(Statement::glue(updates, " , "));
    q.append(sql!("WHERE v6 = {} ", "v6"));
    q.append(sql!("AND v7 = {}", "v7"));
    q
}

fn mixed_appends() -> Statement {
    let mut q = sql!("TEST QUERY glue pieces FROM ");
    q.append(sql!("v1 = {}, ", "v1"))
        .append(sql!("v2 = {}, ", "v2"))
        .append(sql!("v3 = {}, ", "v3"))
        .append(sql!("v4 = {}, ", "v4"))
        .append(sql!("v5 = {}, ", "v5"))
        .append(sql!("v6 = v6 "))
        .append(sql!("WHERE v6 = {} ", "v6"))
        .append(sql!("AND v7 = {} ", "v7"))
        .append(sql!("AND v8 = v8"));
    q
}

fn partly_inlined() -> Statement {
    let long_name = "whateverThisIs";
    let mut q = sql!("TEST QUERY glue pieces FROM test WHERE test1 == test2");
    q.append(sql!(" AND v1 = v1,"));
    q.append(sql!(" AND v2 = {}, ", "v2"));
    q.append_with(sql!(" AND v3 = {long_name}"), AppendOptions::inline());
    q.append_with(sql!(" AND v4 = v4"), AppendOptions::inline());
    q
}

mod mysql {
    use super::*;

    #[test]
    fn append() {
        let rendered = team_update().mysql();
        assert_eq!(
            rendered.text(),
            "UPDATE teams SET name = ?, description = ? WHERE id = ? AND org_id = ?"
        );
        assert_eq!(rendered.values(), team_values().as_slice());
    }

    #[test]
    fn multiline() {
        let q = sql!(
            "
            UPDATE teams SET name = {}, description = {}
            WHERE id = {} AND org_id = {}
          ",
            "Team 5",
            "description",
            7,
            "WONKA"
        );
        assert_eq!(
            q.mysql().text(),
            "UPDATE teams SET name = ?, description = ?\nWHERE id = ? AND org_id = ?"
        );
        assert_eq!(q.values(), team_values());
    }

    #[test]
    fn glue() {
        let mut q = sql!(" UPDATE teams SET ");
        q.append(Statement::glue(
            [sql!("name = {}", "Team 5"), sql!("description = {}", "description")],
            " , ",
        ));
        q.append(sql!("WHERE id = {} AND org_id = {}", 7, "WONKA"));
        assert_eq!(
            q.mysql().text(),
            "UPDATE teams SET name = ? , description = ? WHERE id = ? AND org_id = ?"
        );
        assert_eq!(q.values(), team_values());
    }

    #[test]
    fn append_and_glue() {
        assert_eq!(
            glued_pieces().mysql().text(),
            "TEST QUERY glue pieces FROM v1 = ? , v2 = ? , v3 = ? , v4 = ? , v5 = ? WHERE v6 = ? AND v7 = ?"
        );
    }

    #[test]
    fn append_plain_and_templated() {
        let q = mixed_appends();
        assert_eq!(
            q.mysql().text(),
            "TEST QUERY glue pieces FROM v1 = ?, v2 = ?, v3 = ?, v4 = ?, v5 = ?, v6 = v6 WHERE v6 = ? AND v7 = ? AND v8 = v8"
        );
        assert_eq!(q.values().len(), 7);
    }

    #[test]
    fn append_rejects_plain_text() {
        let mut q = sql!("TEST QUERY glue pieces FROM ");
        let err = q
            .try_append(Slot::from("v1 = v1"), AppendOptions::default())
            .unwrap_err();
        assert!(matches!(err, SqlError::Misuse(_)));
    }

    #[test]
    fn append_with_and_without_inlining() {
        let q = partly_inlined();
        assert_eq!(
            q.mysql().text(),
            "TEST QUERY glue pieces FROM test WHERE test1 == test2 AND v1 = v1, AND v2 = ?,  AND v3 = whateverThisIs AND v4 = v4"
        );
        assert_eq!(q.values(), vec![Value::from("v2")]);
    }

    #[test]
    fn quote_identifier_doubles_backticks() {
        assert_eq!(quote_identifier("identifier", Dialect::MySql), "`identifier`");
        assert_eq!(quote_identifier("`quotes`", Dialect::MySql), "```quotes```");
    }
}

mod oracle {
    use super::*;

    #[test]
    fn append() {
        let rendered = team_update().oracle();
        assert_eq!(
            rendered.text(),
            "UPDATE teams SET name = :1, description = :2 WHERE id = :3 AND org_id = :4"
        );
        assert_eq!(rendered.values(), team_values().as_slice());
    }

    #[test]
    fn append_and_glue() {
        assert_eq!(
            glued_pieces().oracle().text(),
            "TEST QUERY glue pieces FROM v1 = :1 , v2 = :2 , v3 = :3 , v4 = :4 , v5 = :5 WHERE v6 = :6 AND v7 = :7"
        );
    }

    #[test]
    fn append_plain_and_templated() {
        assert_eq!(
            mixed_appends().oracle().text(),
            "TEST QUERY glue pieces FROM v1 = :1, v2 = :2, v3 = :3, v4 = :4, v5 = :5, v6 = v6 WHERE v6 = :6 AND v7 = :7 AND v8 = v8"
        );
    }

    #[test]
    fn append_with_and_without_inlining() {
        assert_eq!(
            partly_inlined().oracle().text(),
            "TEST QUERY glue pieces FROM test WHERE test1 == test2 AND v1 = v1, AND v2 = :1,  AND v3 = whateverThisIs AND v4 = v4"
        );
    }

    #[test]
    fn append_only_inlined() {
        let long_name = "whateverThisIs";
        let mut q = sql!("TEST QUERY glue pieces FROM test WHERE test1 == test2");
        q.append_with(sql!(" AND v1 = v1,"), AppendOptions::inline());
        assert_eq!(
            q.oracle().text(),
            "TEST QUERY glue pieces FROM test WHERE test1 == test2 AND v1 = v1,"
        );

        q.append_with(
            sql!(" AND v2 = {} AND v3 = {long_name} AND v4 = 'v4'", "v2"),
            AppendOptions::inline(),
        );
        assert_eq!(
            q.oracle().text(),
            "TEST QUERY glue pieces FROM test WHERE test1 == test2 AND v1 = v1, AND v2 = v2 AND v3 = whateverThisIs AND v4 = 'v4'"
        );
        assert!(q.values().is_empty());
    }
}

mod generic {
    use super::*;
    use sqltag::quote_ident;

    #[test]
    fn question_marks_and_double_quotes() {
        let mut q = sql!("SELECT {} FROM {} WHERE ", quote_ident("user\"name"), quote_ident("users"));
        q.append(Statement::glue([sql!("id = {}", 7), sql!("org = {}", "WONKA")], " AND "));
        let rendered = q.render(Dialect::Generic);
        assert_eq!(
            rendered.text(),
            "SELECT \"user\"\"name\" FROM \"users\" WHERE id = ? AND org = ?"
        );
        assert_eq!(rendered.values(), &[Value::Int(7), Value::from("WONKA")][..]);
        assert_eq!(quote_identifier("a`b", Dialect::Generic), "\"a`b\"");
    }

    #[test]
    fn debug_quotes_identifiers_with_double_quotes() {
        let q = sql!("SELECT * FROM {} WHERE id = {}", quote_ident("t"), 7);
        assert_eq!(q.debug_for(Dialect::Generic), "SELECT * FROM \"t\" WHERE id = 7");
    }
}

mod identifiers {
    use super::*;

    #[test]
    fn postgres_is_the_default() {
        assert_eq!(Dialect::default(), Dialect::Postgres);
        assert_eq!(
            quote_identifier("identifier", Dialect::default()),
            "\"identifier\""
        );
        assert_eq!(
            quote_identifier("\"quotes\"", Dialect::default()),
            "\"\"\"quotes\"\"\""
        );
    }

    #[test]
    fn quoted_identifier_follows_render_dialect() {
        let q = sql!("SELECT * FROM {}", sqltag::quote_ident("my table"));
        assert_eq!(q.postgres().text(), "SELECT * FROM \"my table\"");
        assert_eq!(q.mysql().text(), "SELECT * FROM `my table`");
        assert!(q.values().is_empty());
    }
}
