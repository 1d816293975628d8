mod tests {
    use selenite_glow::channel::{Channel, TryReceiveError, TrySendError};
    use selenite_glow::{Click, ClickChannel};

    #[test]
    fn test_full_queue_returns_click() {
        let channel = ClickChannel::<2>::new();
        let sender = channel.sender();
        assert_eq!(sender.click(), Ok(()));
        assert_eq!(sender.click(), Ok(()));
        assert_eq!(sender.click(), Err(TrySendError(Click)));
        assert_eq!(channel.len(), 2);
    }

    #[test]
    fn test_drain_empties_queue() {
        let channel = ClickChannel::<4>::new();
        for _ in 0..3 {
            channel.sender().click().unwrap();
        }
        assert_eq!(channel.receiver().drain().count(), 3);
        assert!(channel.is_empty());
        assert_eq!(channel.receiver().try_receive(), Err(TryReceiveError));
    }

    #[test]
    fn test_values_keep_order() {
        let channel = Channel::<u8, 4>::new();
        for value in [3, 1, 2] {
            channel.sender().try_send(value).unwrap();
        }
        let receiver = channel.receiver();
        assert_eq!(receiver.try_receive(), Ok(3));
        assert_eq!(receiver.try_receive(), Ok(1));
        assert_eq!(receiver.try_receive(), Ok(2));
    }
}
