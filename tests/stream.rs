use ::pushback::{Error, Stream};

#[test]
fn generation_is_lazy ()
{
    let mut stream = Stream::new(|emitter| async move {
        emitter.emit(1).await;
        unreachable!("the generation routine ran further than requested");
    });

    assert_eq!(stream.get().unwrap(), 1);
}

#[test]
fn get_until_exhausted ()
{
    let mut stream = Stream::new(|emitter| async move {
        emitter.emit(1).await;
        emitter.emit(2).await;
    });

    assert_eq!(stream.get().unwrap(), 1);
    assert_eq!(stream.get().unwrap(), 2);
    assert!(matches!(stream.get(), Err(Error::EndOfStream)));
}

#[test]
fn delivers_items_in_emission_order ()
{
    let mut stream = Stream::new(|emitter| async move {
        for n in 0 .. 100_u32 {
            emitter.emit(n).await;
        }
    });

    let items = stream
        .items()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert_eq!(items, (0 .. 100).collect::<Vec<_>>());
}

#[test]
fn end_of_stream_is_stable ()
{
    let mut stream = Stream::new(|emitter| async move {
        emitter.emit(1).await;
    });

    assert_eq!(stream.get().unwrap(), 1);
    assert!(matches!(stream.get(), Err(Error::EndOfStream)));
    assert!(matches!(stream.get(), Err(Error::EndOfStream)));
    assert!(matches!(stream.peek(), Err(Error::EndOfStream)));
}

#[test]
fn unget_redelivers_last_item ()
{
    let mut stream = Stream::new(|emitter| async move {
        emitter.emit(1).await;
        emitter.emit(2).await;
    });

    assert_eq!(stream.get().unwrap(), 1);
    stream.unget().unwrap();
    assert_eq!(stream.get().unwrap(), 1);
    assert_eq!(stream.get().unwrap(), 2);
}

#[test]
fn second_unget_without_get_fails ()
{
    let mut stream = Stream::new(|emitter| async move {
        emitter.emit(1).await;
        emitter.emit(2).await;
    });

    stream.get().unwrap();
    stream.unget().unwrap();
    assert!(matches!(stream.unget(), Err(Error::MultipleUnget)));
}

#[test]
fn unget_before_any_get_fails ()
{
    let mut stream = Stream::new(|emitter| async move {
        emitter.emit(1).await;
    });

    assert!(matches!(stream.unget(), Err(Error::MultipleUnget)));
}

#[test]
fn unget_after_end_of_stream_redelivers ()
{
    let mut stream = Stream::new(|emitter| async move {
        emitter.emit(1).await;
    });

    assert_eq!(stream.get().unwrap(), 1);
    assert!(matches!(stream.get(), Err(Error::EndOfStream)));
    // The failed retrieval does not disturb the retained item: the
    // pushed-back `1` is still delivered ahead of the (permanent) end.
    stream.unget().unwrap();
    assert_eq!(stream.get().unwrap(), 1);
    assert!(matches!(stream.get(), Err(Error::EndOfStream)));
}

#[test]
fn peek_then_get ()
{
    let mut stream = Stream::new(|emitter| async move {
        emitter.emit(1).await;
    });

    assert_eq!(stream.peek().unwrap(), 1);
    assert_eq!(stream.get().unwrap(), 1);
    assert!(matches!(stream.get(), Err(Error::EndOfStream)));
}

#[test]
fn peek_is_idempotent ()
{
    let mut stream = Stream::new(|emitter| async move {
        emitter.emit(1).await;
        emitter.emit(2).await;
    });

    assert_eq!(stream.peek().unwrap(), 1);
    assert_eq!(stream.peek().unwrap(), 1);
    assert_eq!(stream.get().unwrap(), 1);
    assert_eq!(stream.peek().unwrap(), 2);
    assert_eq!(stream.get().unwrap(), 2);
}

#[test]
fn unget_directly_after_peek_fails ()
{
    let mut stream = Stream::new(|emitter| async move {
        emitter.emit(1).await;
    });

    assert_eq!(stream.peek().unwrap(), 1);
    assert!(matches!(stream.unget(), Err(Error::MultipleUnget)));
}

#[test]
fn unget_with_a_peeked_item_pending_keeps_order ()
{
    let mut stream = Stream::new(|emitter| async move {
        emitter.emit(1).await;
        emitter.emit(2).await;
    });

    assert_eq!(stream.get().unwrap(), 1);
    assert_eq!(stream.peek().unwrap(), 2);
    // The pushed-back `1` lands ahead of the already-peeked `2`.
    stream.unget().unwrap();
    assert_eq!(stream.get().unwrap(), 1);
    assert_eq!(stream.get().unwrap(), 2);
    assert!(matches!(stream.get(), Err(Error::EndOfStream)));
}

#[test]
fn get_values_wraps_single_items ()
{
    let mut stream = Stream::new(|emitter| async move {
        emitter.emit(1).await;
        emitter.emit(2).await;
    });

    assert_eq!(stream.get_values().unwrap(), [1]);
    assert_eq!(stream.get_values().unwrap(), [2]);
    assert!(matches!(stream.get_values(), Err(Error::EndOfStream)));
}

#[test]
fn get_values_keeps_nested_items_nested ()
{
    let mut stream = Stream::new(|emitter| async move {
        emitter.emit(vec![1]).await;
        emitter.emit(vec![2, 3]).await;
    });

    assert_eq!(stream.get_values().unwrap(), [vec![1]]);
    assert_eq!(stream.peek_values().unwrap(), [vec![2, 3]]);
    assert_eq!(stream.get_values().unwrap(), [vec![2, 3]]);
}

#[test]
fn items_recovers_end_of_stream ()
{
    let mut stream = Stream::new(|emitter| async move {
        emitter.emit("only").await;
    });

    let mut items = stream.items();
    assert_eq!(items.next().unwrap().unwrap(), "only");
    assert!(items.next().is_none());
    assert!(items.next().is_none());
}

#[test]
fn items_resumes_from_the_current_position ()
{
    let mut stream = Stream::new(|emitter| async move {
        for n in 1 ..= 4_u32 {
            emitter.emit(n).await;
        }
    });

    assert_eq!(stream.get().unwrap(), 1);
    let firsts = stream
        .items()
        .take(2)
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert_eq!(firsts, [2, 3]);
    assert_eq!(stream.get().unwrap(), 4);
}

#[test]
fn iteration_delivers_a_pushed_back_item_first ()
{
    let mut stream = Stream::new(|emitter| async move {
        emitter.emit(1).await;
        emitter.emit(2).await;
    });

    stream.get().unwrap();
    stream.unget().unwrap();
    let items = (&mut stream)
        .into_iter()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert_eq!(items, [1, 2]);
}

#[test]
fn infinite_generation_is_supported ()
{
    let mut naturals = Stream::new(|emitter| async move {
        let mut n = 0_u64;
        loop {
            emitter.emit(n).await;
            n += 1;
        }
    });

    let firsts = naturals
        .items()
        .take(5)
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    assert_eq!(firsts, [0, 1, 2, 3, 4]);
}

#[test]
fn producer_error_surfaces_from_get ()
{
    let mut stream = Stream::try_new(|emitter| async move {
        emitter.emit(1).await;
        Err(::std::io::Error::other("the source went away"))
    });

    assert_eq!(stream.get().unwrap(), 1);
    match stream.get() {
        | Err(Error::Producer(source)) => {
            assert_eq!(source.to_string(), "the source went away");
        },
        | other => panic!("expected a producer error, got {other:?}"),
    }
    // A failed routine is permanently finished.
    assert!(matches!(stream.get(), Err(Error::EndOfStream)));
}

#[test]
fn producer_error_surfaces_from_iteration ()
{
    let mut stream = Stream::try_new(|emitter| async move {
        emitter.emit(1).await;
        Err(::std::io::Error::other("boom"))
    });

    let mut items = stream.items();
    assert_eq!(items.next().unwrap().unwrap(), 1);
    assert!(items.next().unwrap().is_err());
    assert!(items.next().is_none());
}

#[test]
fn peek_failure_leaves_push_back_state_untouched ()
{
    let mut stream = Stream::new(|emitter| async move {
        emitter.emit(1).await;
    });

    assert_eq!(stream.get().unwrap(), 1);
    assert!(matches!(stream.peek(), Err(Error::EndOfStream)));
    // `1` is still the retained item, eligible for push-back.
    stream.unget().unwrap();
    assert_eq!(stream.get().unwrap(), 1);
}

#[test]
fn borrowing_generation_routines_are_supported ()
{
    let items = [String::from("a"), String::from("b")];
    let borrowed = &items;
    let mut stream = Stream::new(move |emitter| async move {
        for item in borrowed {
            emitter.emit(item.clone()).await;
        }
    });

    assert_eq!(stream.get().unwrap(), "a");
    assert_eq!(stream.get().unwrap(), "b");
    drop(stream);
    assert_eq!(items.len(), 2);
}
