use mandelbrot::colour::INSIDE;
use mandelbrot::{
    render, Complex, Explorer, IntegralPlane, MouseButton, Pixel, PixelBuffer, Renderer, ViewState,
};

#[test]
fn default_view_renders_origin_black_and_far_point_bright() {
    let view = ViewState::default();
    let plane = IntegralPlane(100, 100);
    let mut buffer = PixelBuffer::new(plane);
    render(&mut buffer, &view);

    let origin = view.nearest_pixel(&Complex::new(0.0, 0.0), &plane);
    let far = view.nearest_pixel(&Complex::new(1.9, 1.4), &plane);
    assert_eq!(buffer.get(&origin), INSIDE);
    assert_ne!(buffer.get(&far), INSIDE);
}

#[test]
fn explorer_paints_the_same_picture_as_the_reference_renderer() {
    let plane = IntegralPlane(64, 48);
    let mut explorer = Explorer::new(plane, Renderer::default());
    let painted = explorer.paint().unwrap().image().clone();

    let mut expected = PixelBuffer::new(plane);
    render(&mut expected, &ViewState::default());
    assert_eq!(&painted, expected.image());
}

#[test]
fn zooming_in_and_back_out_keeps_the_scale() {
    let plane = IntegralPlane(80, 60);
    let mut explorer = Explorer::new(plane, Renderer::new(4));
    explorer.paint().unwrap();
    let before = *explorer.view();

    explorer
        .on_double_click(MouseButton::Left, Pixel(20, 45))
        .unwrap();
    explorer
        .on_double_click(MouseButton::Right, Pixel(20, 45))
        .unwrap();

    assert_eq!(explorer.view().width(), before.width());
    assert_eq!(explorer.max_iterations(), before.max_iterations());
    assert_ne!(explorer.view().lower_left(), before.lower_left());
}

#[test]
fn deep_zoom_into_the_cardioid_is_all_black() {
    let plane = IntegralPlane(40, 40);
    let mut explorer = Explorer::new(plane, Renderer::new(2));
    let view = *explorer.view();
    let target = view.nearest_pixel(&Complex::new(-0.2, 0.0), &plane);
    explorer.on_double_click(MouseButton::Left, target).unwrap();
    for _ in 0..3 {
        explorer.on_double_click(MouseButton::Left, Pixel(20, 20)).unwrap();
    }
    assert!(explorer.view().width() < 0.2);
    let corner = explorer.buffer().get(&Pixel(0, 0));
    assert_eq!(corner, INSIDE);
}
