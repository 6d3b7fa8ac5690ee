#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::*;

    fn counting(form: &Form) -> Rc<RefCell<Vec<FormEvent>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        form.subscribe({
            let events = events.clone();
            move |e| events.borrow_mut().push(e.clone())
        });
        events
    }

    #[test]
    fn test_checkbox_toggle_writes_once() {
        let form = Form::new([("agreedToTerms", false)]);
        let events = counting(&form);
        let binder = FieldBinder::new(form.clone());

        let binding = binder.field("agreedToTerms");
        let field = binding.as_boolean().unwrap();
        assert!(!field.checked);
        field.on_boolean_change(true);

        assert_eq!(
            *events.borrow(),
            vec![FormEvent::ValueChanged {
                name: "agreedToTerms".into(),
                value: FieldValue::Bool(true),
            }]
        );
        assert!(binder.field("agreedToTerms").as_boolean().unwrap().checked);
    }

    #[test]
    fn test_tags_remove_writes_remaining_list() {
        let form = Form::builder().array("tags", vec!["a", "b"]).build().unwrap();
        let events = counting(&form);
        let binder = FieldBinder::new(form.clone());

        binder
            .field("tags")
            .as_array()
            .unwrap()
            .remove(&Scalar::from("a"));

        assert_eq!(events.borrow().len(), 1);
        assert_eq!(form.value("tags"), Some(FieldValue::from(vec!["b"])));
    }

    #[test]
    fn test_scalar_change_event_writes_text() {
        let form = Form::new([("city", FieldValue::Null)]);
        let binder = FieldBinder::new(form.clone());

        let binding = binder.field("city");
        assert_eq!(binding.as_scalar().unwrap().value, None);
        binding
            .as_scalar()
            .unwrap()
            .on_change(ChangeEvent::new("x"));

        assert_eq!(form.value("city"), Some(FieldValue::from("x")));
    }

    #[test]
    fn test_empty_list_still_binds_as_array() {
        let form = Form::builder().array("roles", Vec::<String>::new()).build().unwrap();
        let binder = FieldBinder::new(form);
        assert_eq!(binder.field("roles").kind(), FieldKind::Array);
    }

    #[test]
    fn test_binder_over_shared_rc_store() {
        let form = Rc::new(Form::new([("n", 1i64)]));
        let binder = FieldBinder::new(form.clone());
        binder.field("n").as_scalar().unwrap().set_text("2");
        assert_eq!(form.value("n"), Some(FieldValue::from("2")));
    }
}
