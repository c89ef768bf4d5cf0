#[cfg(test)]
mod tests {
    use stitch::{
        Connection, Driver, InsertIntoBuilder, QueryAssembly, QueryBuilder, QueryKind, SqlType,
        StatementError, Value, out, params,
    };
    use stitch_tests::{Binding, PrepareMode, RecordingConnection, RecordingDriver, init_logs};
    use time::macros::datetime;

    #[test]
    fn insert_requests_generated_keys() {
        init_logs();
        let mut connection = RecordingConnection::new();
        let statement = InsertIntoBuilder::into("users")
            .columns(["name", "age"])
            .values(params!["john", 42])
            .create_statement(&mut connection)
            .expect("The statement should be prepared");
        assert!(!statement.is_callable());
        assert_eq!(statement.to_string(), "insert into users(name,age) values(?,?)");
        let prepared = statement.into_prepared().unwrap();
        assert_eq!(prepared.mode(), PrepareMode::GeneratedKeys);
        assert_eq!(
            prepared.binding(1),
            Some(&Binding::Object(Value::Varchar("john".into())))
        );
        assert_eq!(prepared.binding(2), Some(&Binding::Object(Value::Int32(42))));
        assert_eq!(
            connection.history(),
            [(
                PrepareMode::GeneratedKeys,
                "insert into users(name,age) values(?,?)".to_string()
            )]
        );
    }

    #[test]
    fn insert_many_rows() {
        init_logs();
        let mut connection = RecordingConnection::new();
        let prepared = QueryBuilder::insert_into("orders")
            .columns(["id", "placed_at"])
            .rows([
                params![1, datetime!(2024-03-01 08:00:00 +01:00)],
                params![],
                params![2, datetime!(2024-03-01 09:15:00 -04:00)],
            ])
            .create_statement(&mut connection)
            .unwrap()
            .into_prepared()
            .unwrap();
        assert_eq!(prepared.sql(), "insert into orders(id,placed_at) values(?,?),(?,?)");
        assert_eq!(prepared.bindings().len(), 4);
        assert_eq!(prepared.binding(3), Some(&Binding::Object(Value::Int32(2))));
        assert_eq!(
            prepared.get_offset_date_time(4).unwrap(),
            datetime!(2024-03-01 09:15:00 -04:00)
        );
    }

    #[test]
    fn plain_statement() {
        init_logs();
        let mut connection = RecordingConnection::new();
        let assembly = QueryBuilder::plain("select * from users where id in ")
            .params([10, 20, 30], "(", ")", ", ")
            .literal(" and active = ")
            .param(true)
            .build();
        let prepared = assembly
            .create_statement(&mut connection)
            .unwrap()
            .into_prepared()
            .unwrap();
        assert_eq!(prepared.mode(), PrepareMode::Plain);
        assert_eq!(
            prepared.sql(),
            "select * from users where id in (?, ?, ?) and active = ?"
        );
        assert_eq!(prepared.binding(4), Some(&Binding::Object(Value::Boolean(true))));
    }

    #[test]
    fn call_registers_out_parameters() {
        init_logs();
        let mut connection = RecordingConnection::new();
        let statement = QueryBuilder::call("{call add_user(")
            .params(params!["ada", out::<i32>(), out::<String>()], "", ")}", ",")
            .create_statement(&mut connection)
            .unwrap();
        assert!(statement.is_callable());
        let callable = statement.into_callable().unwrap();
        assert_eq!(callable.sql(), "{call add_user(?,?,?)}");
        assert_eq!(callable.prepared().mode(), PrepareMode::Callable);
        assert_eq!(
            callable.binding(1),
            Some(&Binding::Object(Value::Varchar("ada".into())))
        );
        assert_eq!(callable.binding(2), Some(&Binding::Out(SqlType::Integer)));
        assert_eq!(callable.binding(3), Some(&Binding::Out(SqlType::Varchar)));
    }

    #[test]
    fn out_parameter_on_plain_statement() {
        init_logs();
        let mut connection = RecordingConnection::new();
        let error = QueryBuilder::plain("select ")
            .param(out::<i32>())
            .create_statement(&mut connection)
            .expect_err("Plain statements cannot register output parameters");
        assert!(matches!(
            error.downcast_ref::<StatementError>(),
            Some(StatementError::InvalidParameterType { position: 1, .. })
        ));
        // Switching to a call makes the same assembly valid
        let statement = QueryBuilder::plain("{call f(")
            .param(out::<i32>())
            .literal(")}")
            .kind(QueryKind::Call)
            .create_statement(&mut connection)
            .unwrap();
        assert!(statement.is_callable());
    }

    #[test]
    fn preparation_failures() {
        init_logs();
        let mut connection = RecordingConnection::new().reject_sql("selec ");
        let assembly = QueryBuilder::plain("selec ").param(1).build();
        let error = assembly.create_statement(&mut connection).unwrap_err();
        let Some(StatementError::Preparation { kind, sql, .. }) =
            error.downcast_ref::<StatementError>()
        else {
            panic!("Unexpected error: {error:#}");
        };
        assert_eq!(*kind, QueryKind::Plain);
        assert_eq!(sql, "selec ?");
        assert!(format!("{error:#}").contains("Syntax error"));
        assert!(connection.history().is_empty());

        connection.close();
        let error = InsertIntoBuilder::into("t")
            .values([1])
            .create_statement(&mut connection)
            .unwrap_err();
        assert!(matches!(
            error.downcast_ref::<StatementError>(),
            Some(StatementError::Preparation {
                kind: QueryKind::Insert,
                ..
            })
        ));
        assert!(format!("{error:#}").contains("Connection is closed"));
    }

    #[test]
    fn binding_failure_reports_position() {
        init_logs();
        let mut connection = RecordingConnection::new().fail_binding_at(3);
        let error = InsertIntoBuilder::into("t")
            .columns(["a", "b", "c"])
            .values(params![1, 2, "three"])
            .create_statement(&mut connection)
            .unwrap_err();
        let statement_error = error.downcast_ref::<StatementError>().unwrap();
        assert_eq!(statement_error.position(), Some(3));
        let message = format!("{error:#}");
        assert!(message.contains("insert into t(a,b,c) values(?,?,?)"), "{message}");
        assert!(message.contains("Type mismatch"), "{message}");
    }

    #[test]
    fn continue_binding_after_creation() {
        init_logs();
        let mut connection = RecordingConnection::new();
        let mut assembly = QueryAssembly::new(QueryKind::Plain);
        assembly
            .push_literal("update t set a = ")
            .push_parameter(1)
            .push_literal(" where b = ?");
        let mut statement = assembly.create_statement(&mut connection).unwrap();
        let next = statement.bind(&params!["extra"], 2).unwrap();
        assert_eq!(next, 3);
        let prepared = statement.into_prepared().unwrap();
        assert_eq!(
            prepared.binding(2),
            Some(&Binding::Object(Value::Varchar("extra".into())))
        );
    }

    #[test]
    fn driver_name() {
        assert_eq!(RecordingDriver::new().name(), "recording");
        let connection = RecordingConnection::new();
        assert_eq!(connection.driver().name(), "recording");
    }
}
