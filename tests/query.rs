#[cfg(test)]
mod tests {
    use indoc::indoc;
    use stitch::{InsertIntoBuilder, Parameter, QueryBuilder, QueryKind, out, params};

    #[test]
    fn insert_into() {
        let query = InsertIntoBuilder::into("users")
            .columns(["a", "b"])
            .values(params![1, 2])
            .build();
        assert_eq!(query.sql(), "insert into users(a,b) values(?,?)");
        assert_eq!(&query.parameters()[..], params![1, 2].as_slice());
        assert_eq!(query.kind(), QueryKind::Insert);
    }

    #[test]
    fn insert_into_empty_clauses() {
        let query = InsertIntoBuilder::into("users")
            .columns(Vec::<&str>::new())
            .values(Vec::<Parameter>::new())
            .build();
        assert_eq!(query.sql(), "insert into users");
        assert!(query.parameters().is_empty());

        let query = InsertIntoBuilder::create("insert into t")
            .values(params![])
            .rows([params![], params![]])
            .build();
        assert_eq!(query.sql(), "insert into t");
        assert!(query.parameters().is_empty());
    }

    #[test]
    fn insert_into_rows() {
        let query = QueryBuilder::insert_into("\"trades\"")
            .columns(["id", "symbol", "price"])
            .rows([
                params![1, "AAPL", 189.5],
                params![2, "MSFT", 402.25],
                params![3, "NVDA", 120.0],
            ])
            .build();
        assert_eq!(
            query.sql(),
            indoc! {r#"
                insert into "trades"(id,symbol,price) values(?,?,?),(?,?,?),(?,?,?)
            "#}
            .trim()
        );
        assert_eq!(query.parameters().len(), 3);
        assert_eq!(query.parameters().flat_len(), 9);
        assert_eq!(
            query.parameters().iter_flat().nth(4),
            Some(&Parameter::from("MSFT"))
        );
    }

    #[test]
    fn insert_into_custom_prefix() {
        let query = InsertIntoBuilder::create("insert ignore into logs")
            .columns(["message"])
            .values(["started"])
            .build();
        assert_eq!(query.sql(), "insert ignore into logs(message) values(?)");
        assert_eq!(query.kind(), QueryKind::Insert);
    }

    #[test]
    fn call() {
        let query = QueryBuilder::call("{call add_user")
            .params(params!["john", out::<i32>()], "(", ")}", ",")
            .build();
        assert_eq!(query.sql(), "{call add_user(?,?)}");
        assert_eq!(query.kind(), QueryKind::Call);
        assert_eq!(query.parameters().len(), 2);
    }

    #[test]
    fn select() {
        let query = QueryBuilder::plain("select ")
            .literals(["id", "name"], "", "", ", ")
            .literal(" from users where id in ")
            .params([10, 20, 30], "(", ")", ", ")
            .literal(" and active = ")
            .param(true)
            .literal(" limit ")
            .literals([25], "", "", "")
            .build();
        assert_eq!(
            query.sql(),
            "select id, name from users where id in (?, ?, ?) and active = ? limit 25"
        );
        assert_eq!(&query.parameters()[..], params![10, 20, 30, true].as_slice());
        assert_eq!(query.kind(), QueryKind::Plain);
    }

    #[test]
    fn kind_override() {
        let query = QueryBuilder::plain("insert into t values ")
            .params([1], "(", ")", ",")
            .kind(QueryKind::Insert)
            .build();
        assert_eq!(query.kind(), QueryKind::Insert);
        assert_eq!(query.sql(), "insert into t values (?)");
    }

    #[test]
    fn parameters_are_outbound() {
        let query = InsertIntoBuilder::into("users")
            .columns(["name", "age"])
            .rows([params!["it's", 31], params!["bob", Option::<i32>::None]])
            .build();
        assert_eq!(
            query.to_string(),
            "insert into users(name,age) values(?,?),(?,?)"
        );
        assert_eq!(
            query.parameters().to_string(),
            "[['it''s', 31], ['bob', NULL]]"
        );
        assert_eq!(
            query.parameters().to_json(),
            serde_json::json!([["it's", 31], ["bob", null]])
        );
    }
}
