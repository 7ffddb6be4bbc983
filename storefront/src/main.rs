fn main() {
    bliss_storefront::run();
}
